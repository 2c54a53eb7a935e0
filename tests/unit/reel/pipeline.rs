use super::*;

use std::path::PathBuf;

use crate::foundation::error::TallyError;
use crate::numeral::scheme::NumeralScheme;

#[test]
fn render_reel_rejects_invalid_spec_before_touching_disk() {
    let root = PathBuf::from("target").join("pipeline_unit_invalid");
    let spec = ReelSpec {
        fps: 0,
        duration_secs: 1.0,
        scheme: NumeralScheme::Uniform,
        assets_dir: root.join("assets"),
        frames_dir: root.join("frames"),
        out_path: root.join("out.mp4"),
        progress_every: 0,
    };

    assert!(render_reel(&spec).is_err());
    assert!(!spec.frames_dir.exists());
}

#[test]
fn render_reel_surfaces_missing_assets() {
    let root = PathBuf::from("target").join("pipeline_unit_missing");
    let spec = ReelSpec {
        fps: 2,
        duration_secs: 1.0,
        scheme: NumeralScheme::Uniform,
        assets_dir: root.join("assets"),
        frames_dir: root.join("frames"),
        out_path: root.join("out.mp4"),
        progress_every: 0,
    };

    let err = render_reel(&spec).unwrap_err();
    assert!(matches!(err, TallyError::MissingAsset { .. }));
}
