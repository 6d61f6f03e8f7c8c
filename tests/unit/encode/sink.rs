use super::*;
use crate::foundation::core::Viewport;

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::default(),
    })
    .unwrap();
    let frame = FrameRGBA::empty(Viewport::new(2, 1));
    sink.push_frame(FrameIndex(3), &frame).unwrap();
    sink.push_frame(FrameIndex(4), &frame).unwrap();
    sink.end().unwrap();

    assert!(sink.ended);
    assert_eq!(sink.frames.len(), 2);
    assert_eq!(sink.frames[1].0, FrameIndex(4));
    assert_eq!(sink.last(), Some(&frame));
}

#[test]
fn out_of_order_frames_are_rejected() {
    let mut sink = InMemorySink::new();
    let frame = FrameRGBA::empty(Viewport::new(1, 1));
    sink.push_frame(FrameIndex(5), &frame).unwrap();
    let err = sink.push_frame(FrameIndex(5), &frame).unwrap_err();
    assert!(err.to_string().starts_with("encode error: "));
    assert!(sink.push_frame(FrameIndex(2), &frame).is_err());
}
