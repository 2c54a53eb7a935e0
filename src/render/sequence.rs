use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::store::DigitAssetStore;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::TallyResult;
use crate::numeral::scheme::NumeralScheme;
use crate::render::composite::{CompositeFrame, compose_row};

#[derive(Clone, Debug)]
/// Output configuration for composite-frame generation.
pub struct SequenceOpts {
    /// Directory receiving `composite_XXXXX.png` files.
    pub frames_dir: PathBuf,
    /// Emit a progress line every this many frames (0 disables).
    pub progress_every: u64,
}

impl SequenceOpts {
    /// Options writing into `frames_dir` with the default progress interval.
    pub fn new(frames_dir: impl Into<PathBuf>) -> Self {
        Self {
            frames_dir: frames_dir.into(),
            progress_every: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters for one generation run.
pub struct SequenceStats {
    /// Composite frames written to disk.
    pub frames_written: u64,
}

/// File name of the composite for 1-based frame `index`.
///
/// Fixed-width decimal so that directory listing order equals frame order,
/// matching the assembler's `composite_%05d.png` input pattern.
pub fn frame_file_name(index: FrameIndex) -> String {
    format!("composite_{:05}.png", index.0)
}

/// Generate one composite PNG per frame index `1..=total_frames`.
///
/// Each index is encoded to `width` digit values under `scheme`, the
/// matching glyphs are concatenated, and the result lands in
/// `opts.frames_dir` (created if absent). Frames are produced strictly in
/// increasing index order; each frame is pure given its index, so a partial
/// directory can simply be deleted and the run retried.
pub fn generate_frames(
    total_frames: u64,
    width: usize,
    scheme: NumeralScheme,
    store: &mut DigitAssetStore,
    opts: &SequenceOpts,
) -> TallyResult<SequenceStats> {
    std::fs::create_dir_all(&opts.frames_dir)
        .with_context(|| format!("create frames directory '{}'", opts.frames_dir.display()))?;

    let mut stats = SequenceStats::default();
    for index in 1..=total_frames {
        let digits = scheme.encode(index, width)?;
        let glyphs = digits
            .iter()
            .map(|&d| store.get(d))
            .collect::<TallyResult<Vec<_>>>()?;
        let frame = compose_row(&glyphs)?;
        write_frame_png(&opts.frames_dir, FrameIndex(index), &frame)?;
        stats.frames_written += 1;

        if opts.progress_every > 0 && index.is_multiple_of(opts.progress_every) {
            tracing::info!(frame = index, total = total_frames, "generated composite frames");
        }
    }

    Ok(stats)
}

fn write_frame_png(dir: &Path, index: FrameIndex, frame: &CompositeFrame) -> TallyResult<()> {
    let path = dir.join(frame_file_name(index));
    image::save_buffer_with_format(
        &path,
        &frame.rgba8,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write composite frame '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
