//! Tallyreel renders a counting video from per-digit glyph images.
//!
//! A run turns a frame count into one composite PNG per frame index, each
//! composite being the horizontal concatenation of digit glyphs, then hands
//! the numbered sequence to the system `ffmpeg` binary for MP4 assembly.
//!
//! # Pipeline overview
//!
//! 1. **Estimate**: [`NumeralScheme::width`] fixes the digit-position count for the whole run
//! 2. **Encode**: [`NumeralScheme::encode`] turns each frame index into a digit sequence
//! 3. **Compose**: glyph images are concatenated into one [`CompositeFrame`]
//! 4. **Assemble**: the PNG sequence is encoded to MP4 via the system `ffmpeg`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: estimation and encoding are pure for a given input.
//! - **Fixed width**: every frame of one run encodes to the same digit count,
//!   so composites line up and asset lookups are predictable.
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod numeral;
mod reel;
mod render;

pub use assets::store::{DigitAssetStore, DigitImage, decode_image, digit_file_name};
pub use encode::ffmpeg::{AssembleConfig, assemble_video, ensure_parent_dir, is_ffmpeg_on_path};
pub use foundation::core::{DIGIT_BASE, DigitValue, FrameIndex};
pub use foundation::error::{TallyError, TallyResult};
pub use numeral::scheme::{NumeralScheme, saturated_expand, uniform_digit_count};
pub use reel::model::ReelSpec;
pub use reel::pipeline::{ReelStats, render_reel};
pub use render::composite::{CompositeFrame, compose_row};
pub use render::sequence::{SequenceOpts, SequenceStats, frame_file_name, generate_frames};
