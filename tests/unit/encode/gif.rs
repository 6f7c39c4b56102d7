use super::*;
use crate::foundation::core::Rgb8;
use image::AnimationDecoder as _;
use image::codecs::gif::GifDecoder;
use std::io::Cursor;
use std::time::Duration;

fn solid(color: Rgb8) -> Frame {
    Frame::blank(8, 8, color).unwrap()
}

fn decode(bytes: Vec<u8>) -> Vec<image::Frame> {
    GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

#[test]
fn encodes_every_frame_with_its_delay() {
    let frames = vec![solid(Rgb8::new(255, 0, 0)), solid(Rgb8::new(0, 0, 255))];
    let mut bytes = Vec::new();
    encode_gif_to_writer(&mut bytes, &frames, 200, true).unwrap();
    assert_eq!(&bytes[..6], b"GIF89a");

    let decoded = decode(bytes);
    assert_eq!(decoded.len(), 2);
    assert_eq!(Duration::from(decoded[0].delay()), Duration::from_millis(200));
    assert_eq!(decoded[0].buffer().dimensions(), (8, 8));
    assert_eq!(decoded[0].buffer().get_pixel(3, 3).0, [255, 0, 0, 255]);
    assert_eq!(decoded[1].buffer().get_pixel(3, 3).0, [0, 0, 255, 255]);
}

#[test]
fn looping_gifs_carry_the_netscape_extension() {
    let frames = vec![solid(Rgb8::new(1, 2, 3))];
    let mut looping = Vec::new();
    encode_gif_to_writer(&mut looping, &frames, 100, true).unwrap();
    let mut once = Vec::new();
    encode_gif_to_writer(&mut once, &frames, 100, false).unwrap();

    let has_netscape = |b: &[u8]| b.windows(11).any(|w| w == b"NETSCAPE2.0");
    assert!(has_netscape(&looping));
    assert!(!has_netscape(&once));
}

#[test]
fn empty_frame_list_is_rejected() {
    let err = encode_gif_to_writer(Vec::new(), &[], 100, true).unwrap_err();
    assert!(matches!(err, IdentimorphError::EmptyFrameSequence(_)));
}

#[test]
fn sink_enforces_ordering_and_size() {
    let dir = PathBuf::from("target").join("unit_gif_sink_order");
    let mut sink = GifSink::new(GifSinkOpts::new(dir.join("out.gif")));
    let frame = solid(Rgb8::new(9, 9, 9));
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());

    sink.begin(SinkConfig {
        width: 8,
        height: 8,
        frame_duration_ms: 100,
        loop_forever: true,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    let wrong = Frame::blank(4, 4, Rgb8::new(0, 0, 0)).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &wrong).is_err());
}

#[test]
fn sink_writes_a_gif_file() {
    let dir = PathBuf::from("target").join("unit_gif_sink_write");
    let out = dir.join("nested").join("anim.gif");
    let _ = std::fs::remove_file(&out);

    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(SinkConfig {
        width: 8,
        height: 8,
        frame_duration_ms: 500,
        loop_forever: true,
    })
    .unwrap();
    for i in 0..3u8 {
        sink.push_frame(FrameIndex(u64::from(i)), &solid(Rgb8::new(i * 80, 0, 0)))
            .unwrap();
    }
    sink.end().unwrap();

    let decoded = decode(std::fs::read(&out).unwrap());
    assert_eq!(decoded.len(), 3);
    assert_eq!(Duration::from(decoded[2].delay()), Duration::from_millis(500));
}

#[test]
fn sink_respects_overwrite_false() {
    let dir = PathBuf::from("target").join("unit_gif_sink_keep");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("keep.gif");
    std::fs::write(&out, b"existing").unwrap();

    let mut opts = GifSinkOpts::new(&out);
    opts.overwrite = false;
    let mut sink = GifSink::new(opts);
    let err = sink
        .begin(SinkConfig {
            width: 8,
            height: 8,
            frame_duration_ms: 100,
            loop_forever: true,
        })
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read(&out).unwrap(), b"existing");
}
