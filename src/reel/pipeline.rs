use crate::assets::store::DigitAssetStore;
use crate::encode::ffmpeg::{AssembleConfig, assemble_video};
use crate::foundation::error::TallyResult;
use crate::reel::model::ReelSpec;
use crate::render::sequence::{SequenceOpts, generate_frames};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters for one completed run.
pub struct ReelStats {
    /// Frames implied by fps and duration.
    pub total_frames: u64,
    /// Digit positions used for every frame of the run.
    pub fixed_width: usize,
    /// Composite frames written to disk.
    pub frames_written: u64,
}

/// Run a complete reel: estimate the fixed width, generate one composite
/// frame per index, then assemble the MP4.
///
/// Composite frames are left in `spec.frames_dir` after assembly so a failed
/// or repeated encode can reuse them without regenerating.
#[tracing::instrument(skip(spec))]
pub fn render_reel(spec: &ReelSpec) -> TallyResult<ReelStats> {
    spec.validate()?;

    let total_frames = spec.total_frames();
    let fixed_width = spec.scheme.width(total_frames);
    tracing::info!(total_frames, fixed_width, scheme = ?spec.scheme, "starting reel");

    let mut store = DigitAssetStore::open(&spec.assets_dir);
    let opts = SequenceOpts {
        frames_dir: spec.frames_dir.clone(),
        progress_every: spec.progress_every,
    };
    let seq = generate_frames(total_frames, fixed_width, spec.scheme, &mut store, &opts)?;

    assemble_video(&AssembleConfig::new(&spec.frames_dir, spec.fps, &spec.out_path))?;
    tracing::info!(out = %spec.out_path.display(), "assembled video");

    Ok(ReelStats {
        total_frames,
        fixed_width,
        frames_written: seq.frames_written,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/reel/pipeline.rs"]
mod tests;
