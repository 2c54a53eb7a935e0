use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::foundation::error::{TallyError, TallyResult};

#[derive(Clone, Debug)]
/// Options for assembling a numbered PNG sequence into an MP4.
pub struct AssembleConfig {
    /// Directory holding the numbered composite frames.
    pub frames_dir: PathBuf,
    /// printf-style input pattern inside `frames_dir`.
    pub pattern: String,
    /// Output frame rate in frames per second.
    pub fps: u32,
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Overwrite `out_path` if it already exists.
    pub overwrite: bool,
}

impl AssembleConfig {
    /// Config for the default `composite_%05d.png` sequence layout.
    pub fn new(frames_dir: impl Into<PathBuf>, fps: u32, out_path: impl Into<PathBuf>) -> Self {
        Self {
            frames_dir: frames_dir.into(),
            pattern: "composite_%05d.png".to_string(),
            fps,
            out_path: out_path.into(),
            overwrite: true,
        }
    }

    pub fn validate(&self) -> TallyResult<()> {
        if self.fps == 0 {
            return Err(TallyError::validation("assemble fps must be non-zero"));
        }
        if self.pattern.trim().is_empty() {
            return Err(TallyError::validation(
                "assemble input pattern must be non-empty",
            ));
        }
        Ok(())
    }
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> TallyResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Assemble the numbered frames under `cfg.frames_dir` into an MP4 by
/// invoking the system `ffmpeg` binary.
///
/// `ffmpeg` must be installed and on `PATH`; this is checked up front. On a
/// non-zero exit the error carries ffmpeg's stderr, and the frame files are
/// left on disk so a retry can reuse them without regenerating.
pub fn assemble_video(cfg: &AssembleConfig) -> TallyResult<()> {
    cfg.validate()?;
    ensure_parent_dir(&cfg.out_path)?;

    if !cfg.overwrite && cfg.out_path.exists() {
        return Err(TallyError::validation(format!(
            "output file '{}' already exists",
            cfg.out_path.display()
        )));
    }

    if !is_ffmpeg_on_path() {
        return Err(TallyError::assembler(
            "ffmpeg is required for MP4 assembly, but was not found on PATH",
        ));
    }

    // System binary rather than linked FFmpeg, so no native dev headers are
    // required. h264 + yuv420p for broad player compatibility.
    let input = cfg.frames_dir.join(&cfg.pattern);
    let mut cmd = Command::new("ffmpeg");
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    if cfg.overwrite {
        cmd.arg("-y");
    } else {
        cmd.arg("-n");
    }

    cmd.args([
        "-loglevel",
        "error",
        "-framerate",
        &cfg.fps.to_string(),
        "-i",
    ])
    .arg(&input)
    .args([
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ])
    .arg(&cfg.out_path);

    tracing::debug!(?cmd, "spawning ffmpeg");

    let output = cmd.output().map_err(|e| {
        TallyError::assembler(format!(
            "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
        ))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TallyError::assembler(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}
