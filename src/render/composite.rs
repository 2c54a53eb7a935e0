use crate::assets::store::DigitImage;
use crate::foundation::error::{TallyError, TallyResult};

#[derive(Clone, Debug)]
/// One composited output frame in straight-alpha RGBA8.
pub struct CompositeFrame {
    /// Width in pixels (sum of glyph widths).
    pub width: u32,
    /// Height in pixels (max glyph height).
    pub height: u32,
    /// Pixel bytes in row-major RGBA8.
    pub rgba8: Vec<u8>,
}

/// Concatenate digit glyphs left-to-right into one composite frame.
///
/// The canvas width is the sum of glyph widths and its height the maximum
/// glyph height; glyphs are pasted top-aligned, and rows a glyph does not
/// cover stay fully transparent.
pub fn compose_row(glyphs: &[DigitImage]) -> TallyResult<CompositeFrame> {
    if glyphs.is_empty() {
        return Err(TallyError::validation(
            "compose_row needs at least one glyph",
        ));
    }

    let total_width: u64 = glyphs.iter().map(|g| u64::from(g.width)).sum();
    let width = u32::try_from(total_width)
        .map_err(|_| TallyError::validation("composite width overflows u32"))?;
    let height = glyphs.iter().map(|g| g.height).max().unwrap_or(0);

    let dst_stride = width as usize * 4;
    let mut rgba8 = vec![0u8; dst_stride * height as usize];

    let mut x_offset = 0usize;
    for glyph in glyphs {
        let src_stride = glyph.width as usize * 4;
        for y in 0..glyph.height as usize {
            let src = &glyph.rgba8[y * src_stride..(y + 1) * src_stride];
            let dst_start = y * dst_stride + x_offset * 4;
            rgba8[dst_start..dst_start + src_stride].copy_from_slice(src);
        }
        x_offset += glyph.width as usize;
    }

    Ok(CompositeFrame {
        width,
        height,
        rgba8,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
