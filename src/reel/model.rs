use std::path::PathBuf;

use crate::foundation::error::{TallyError, TallyResult};
use crate::numeral::scheme::NumeralScheme;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Description of one counter-video run.
///
/// A spec can be built in code or loaded from JSON; [`ReelSpec::validate`]
/// must pass before any frame generation starts.
pub struct ReelSpec {
    /// Output frame rate in frames per second.
    pub fps: u32,
    /// Video duration in seconds.
    pub duration_secs: f64,
    /// Digit-encoding policy.
    pub scheme: NumeralScheme,
    /// Directory holding `num_XXXX.png` digit glyphs.
    pub assets_dir: PathBuf,
    /// Scratch directory for composite frames.
    #[serde(default = "default_frames_dir")]
    pub frames_dir: PathBuf,
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Progress interval in frames (0 disables progress lines).
    #[serde(default = "default_progress_every")]
    pub progress_every: u64,
}

fn default_frames_dir() -> PathBuf {
    PathBuf::from("composite_frames")
}

fn default_progress_every() -> u64 {
    100
}

impl ReelSpec {
    /// Total frame count implied by fps and duration.
    pub fn total_frames(&self) -> u64 {
        (f64::from(self.fps) * self.duration_secs).floor().max(0.0) as u64
    }

    /// Validate run parameters. Rejected specs never start generating.
    pub fn validate(&self) -> TallyResult<()> {
        if self.fps == 0 {
            return Err(TallyError::validation("fps must be > 0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(TallyError::validation(
                "duration_secs must be finite and > 0",
            ));
        }
        if self.total_frames() == 0 {
            return Err(TallyError::validation(
                "fps and duration_secs yield zero output frames",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reel/model.rs"]
mod tests;
