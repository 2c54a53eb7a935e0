use super::*;

#[test]
fn frame_file_names_sort_in_frame_order() {
    assert_eq!(frame_file_name(FrameIndex(1)), "composite_00001.png");
    assert_eq!(frame_file_name(FrameIndex(123)), "composite_00123.png");
    assert_eq!(frame_file_name(FrameIndex(99_999)), "composite_99999.png");
}

#[test]
fn sequence_opts_default_progress_interval() {
    let opts = SequenceOpts::new("composite_frames");
    assert_eq!(opts.progress_every, 100);
}
