use mathcast_core::MediaSegment;
use mathcast_error::MathcastErrorKind;
use mathcast_media::{Ffmpeg, VideoAssembler, WorkDir};
use std::path::Path;

fn segment(workdir: &Path, section_id: &str, create_file: bool) -> MediaSegment {
    let video = workdir.join(format!("{section_id}_synchronized.mp4"));
    if create_file {
        std::fs::write(&video, b"mp4").unwrap();
    }
    MediaSegment::new(
        section_id,
        video,
        workdir.join(format!("{section_id}.wav")),
        "script",
        5.0,
    )
}

#[tokio::test]
async fn empty_segment_list_is_rejected() {
    let workdir = WorkDir::create_temp().unwrap();
    let assembler = Ffmpeg::from_env();
    let assembler = VideoAssembler::new(assembler, workdir.path().join("out"));

    let err = assembler
        .combine(&[], "Empty", workdir.path(), None)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), MathcastErrorKind::Assembly(_)));
}

#[tokio::test]
async fn missing_segment_file_is_fatal() {
    let workdir = WorkDir::create_temp().unwrap();
    let assembler = VideoAssembler::new(Ffmpeg::from_env(), workdir.path().join("out"));

    let segments = vec![
        segment(workdir.path(), "section1", true),
        segment(workdir.path(), "section2", false),
    ];
    let err = assembler
        .combine(&segments, "Partial", workdir.path(), None)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("section2"));
}

#[tokio::test]
async fn existing_target_is_returned_without_remuxing() {
    let workdir = WorkDir::create_temp().unwrap();
    let out_dir = workdir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();
    // Pre-existing final video from an earlier run.
    std::fs::write(out_dir.join("Resumed_Run.mp4"), b"final").unwrap();

    let assembler = VideoAssembler::new(Ffmpeg::from_env(), out_dir.clone());
    let segments = vec![segment(workdir.path(), "section1", true)];

    let path = assembler
        .combine(&segments, "Resumed Run", workdir.path(), None)
        .await
        .unwrap();

    assert_eq!(path, out_dir.join("Resumed_Run.mp4"));
    assert_eq!(std::fs::read(&path).unwrap(), b"final");
}
