use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::foundation::core::DigitValue;
use crate::foundation::error::{TallyError, TallyResult};

#[derive(Clone, Debug)]
/// Decoded digit glyph in straight-alpha RGBA8.
pub struct DigitImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major RGBA8.
    pub rgba8: Arc<Vec<u8>>,
}

/// File name of the glyph for `digit` inside the asset directory.
pub fn digit_file_name(digit: DigitValue) -> String {
    format!("num_{:04}.png", digit.0)
}

/// Read-only store of digit glyph images, decoded lazily and cached.
///
/// Every digit value the encoder can emit must have a matching
/// `num_XXXX.png` under `root`; a missing file is fatal at render time.
#[derive(Debug)]
pub struct DigitAssetStore {
    root: PathBuf,
    cache: HashMap<DigitValue, DigitImage>,
}

impl DigitAssetStore {
    /// Open a store rooted at `root`. No files are touched until the first
    /// [`DigitAssetStore::get`].
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Root directory the store resolves glyph files against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fetch the glyph for `digit`, decoding it on first use.
    ///
    /// The returned image shares its pixel buffer with the cache.
    pub fn get(&mut self, digit: DigitValue) -> TallyResult<DigitImage> {
        if let Some(img) = self.cache.get(&digit) {
            return Ok(img.clone());
        }

        let img = load_digit_image(&self.root, digit)?;
        self.cache.insert(digit, img.clone());
        Ok(img)
    }
}

fn load_digit_image(root: &Path, digit: DigitValue) -> TallyResult<DigitImage> {
    let path = root.join(digit_file_name(digit));
    if !path.is_file() {
        return Err(TallyError::missing_asset(digit.0, path));
    }

    let bytes = std::fs::read(&path)
        .with_context(|| format!("read digit asset '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Decode encoded image bytes to RGBA8.
pub fn decode_image(bytes: &[u8]) -> TallyResult<DigitImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DigitImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
