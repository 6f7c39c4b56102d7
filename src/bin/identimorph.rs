use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "identimorph", version, about = "Turn text into animated identicons")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animation as a looping GIF.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the activation grid and its spiral order.
    Grid(GridArgs),
}

#[derive(Args, Debug)]
struct GenArgs {
    /// Seed text.
    #[arg(long)]
    text: Option<String>,

    /// Sequencing mode.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Frame count (classic mode only).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    frames: Option<u32>,

    /// Blocks per side.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=7))]
    blocks: Option<u32>,

    /// Canvas size in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(64..=512))]
    size: Option<u32>,

    /// Glow blur radius (0 disables glow).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=10))]
    glow: Option<u32>,

    /// Frames per second.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    fps: Option<u32>,

    /// JSON config to start from; other flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    gen_args: GenArgs,

    /// Output GIF path (defaults to `<text>_identimorph.gif`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Refuse to replace an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// Rasterize frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    gen_args: GenArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Seed text.
    #[arg(long)]
    text: String,

    /// Blocks per side.
    #[arg(long, default_value_t = identimorph::DEFAULT_BLOCKS, value_parser = clap::value_parser!(u32).range(1..=7))]
    blocks: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeChoice {
    Classic,
    Spiral,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Grid(args) => cmd_grid(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &GenArgs) -> anyhow::Result<identimorph::IdentimorphConfig> {
    let mut cfg = match (&args.config, args.mode) {
        (Some(path), _) => identimorph::IdentimorphConfig::from_path(path)?,
        (None, Some(ModeChoice::Spiral)) => identimorph::IdentimorphConfig::spiral_default(),
        (None, _) => identimorph::IdentimorphConfig::classic_default(),
    };

    if let Some(text) = &args.text {
        cfg.seed = text.clone();
    }
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(glow) = args.glow {
        cfg.glow = glow;
    }
    if let Some(fps) = args.fps {
        cfg.fps = identimorph::Fps::new(fps)?;
    }

    let blocks = args.blocks.unwrap_or(cfg.mode.blocks());
    cfg.mode = match (args.mode, cfg.mode) {
        (Some(ModeChoice::Spiral), _) | (None, identimorph::Mode::Spiral { .. }) => {
            if args.frames.is_some() {
                anyhow::bail!("--frames only applies to classic mode");
            }
            identimorph::Mode::Spiral { blocks }
        }
        (_, identimorph::Mode::Classic { frame_count, .. }) => identimorph::Mode::Classic {
            frame_count: args.frames.unwrap_or(frame_count),
            blocks,
        },
        (Some(ModeChoice::Classic), identimorph::Mode::Spiral { .. }) => {
            identimorph::Mode::Classic {
                frame_count: args.frames.unwrap_or(identimorph::DEFAULT_FRAME_COUNT),
                blocks,
            }
        }
    };

    cfg.validate()?;
    Ok(cfg)
}

fn default_out_path(seed: &str) -> PathBuf {
    let stem: String = seed
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    PathBuf::from(format!("{stem}_identimorph.gif"))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.gen_args)?;
    let threading = identimorph::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let anim = identimorph::generate_with_threading(&cfg, &threading)?;

    let out = args.out.unwrap_or_else(|| default_out_path(&cfg.seed));
    let mut opts = identimorph::GifSinkOpts::new(&out);
    opts.overwrite = !args.no_overwrite;
    let mut sink = identimorph::GifSink::new(opts);
    identimorph::render_into(&anim, &mut sink)
        .with_context(|| format!("write gif '{}'", out.display()))?;

    eprintln!(
        "wrote {} ({} mode, {} frames)",
        out.display(),
        cfg.mode.name(),
        anim.len()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.gen_args)?;
    let frame = identimorph::render_frame(&cfg, identimorph::FrameIndex(args.index))?;

    identimorph::ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let digest = identimorph::digest(&args.text);
    let grid = identimorph::build_grid(&digest, args.blocks as usize)?;
    let (height, width) = grid.shape();
    let order = identimorph::spiral_order(height, width);

    println!("digest: {}", digest.to_hex());
    println!();
    print!("{}", grid.to_text());
    println!();
    println!("spiral order:");
    for row in order.ranks().chunks(width) {
        let line: Vec<String> = row.iter().map(|step| format!("{step:>3}")).collect();
        println!("{}", line.join(""));
    }
    Ok(())
}
