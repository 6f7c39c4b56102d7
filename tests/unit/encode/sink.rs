use super::*;
use crate::foundation::core::Rgb8;

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());

    let cfg = SinkConfig {
        width: 2,
        height: 2,
        frame_duration_ms: 100,
        loop_forever: true,
    };
    sink.begin(cfg.clone()).unwrap();
    let frame = Frame::blank(2, 2, Rgb8::new(1, 2, 3)).unwrap();
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.push_frame(FrameIndex(1), &frame).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg.clone()));
    assert_eq!(sink.frames().len(), 2);

    // A new run starts from scratch.
    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
}
