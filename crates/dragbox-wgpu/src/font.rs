//! Font loading and CPU text rasterization with ab_glyph.
//!
//! A whole string is rasterized into one RGBA bitmap, which the renderer
//! uploads as a texture. Metrics match the bitmap exactly, so measuring and
//! rendering agree on every size.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font as _, FontArc, Glyph, PxScale, ScaleFont as _};
use dragbox::{Color, IntrinsicSize, RenderError};

use crate::error::InitError;

/// An RGBA8 (sRGB) image of a rendered string.
#[derive(Debug, Clone)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Columns a rendered string occupies.
///
/// The pen starts at x = 0, but outlines may start left of it (negative side
/// bearing) or end past the final advance. The bitmap covers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HorizontalSpan {
    /// Added to glyph x positions to land inside the bitmap
    offset_x: i32,
    width: u32,
}

impl HorizontalSpan {
    fn new(advance: f32, outlines: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let (min_x, max_x) = outlines
            .into_iter()
            .fold((0.0_f32, advance), |(lo, hi), (min, max)| {
                (lo.min(min), hi.max(max))
            });
        let left = min_x.floor();
        Self {
            offset_x: -left as i32,
            width: (max_x - left).ceil().max(0.0) as u32,
        }
    }
}

/// A font at a fixed pixel size.
#[derive(Clone)]
pub struct Font {
    font: FontArc,
    scale: PxScale,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("size_px", &self.scale.y).finish()
    }
}

impl Font {
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> Result<Self, ab_glyph::InvalidFont> {
        let font = FontArc::try_from_vec(bytes)?;
        Ok(Self {
            font,
            scale: PxScale::from(size_px.max(1.0)),
        })
    }

    pub fn from_file(path: &Path, size_px: f32) -> Result<Self, InitError> {
        let bytes = std::fs::read(path).map_err(|source| InitError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, size_px).map_err(|_| InitError::FontParse(path.to_path_buf()))
    }

    /// Load the first candidate that exists.
    pub fn from_candidates(candidates: &[PathBuf], size_px: f32) -> Result<Self, InitError> {
        let Some(path) = candidates.iter().find(|path| path.is_file()) else {
            return Err(InitError::FontNotFound(candidates.to_vec()));
        };
        log::info!("loading font {}", path.display());
        Self::from_file(path, size_px)
    }

    pub fn size_px(&self) -> f32 {
        self.scale.y
    }

    /// Height of one line: ascent to descent.
    pub fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        scaled.ascent() - scaled.descent()
    }

    /// Lay out `text` on a single baseline. Returns the glyphs and the pen
    /// advance after the last one.
    fn layout(&self, text: &str) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = scaled.ascent();

        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret_x = 0.0_f32;
        let mut prev = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret_x += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret_x, baseline)));
            caret_x += scaled.h_advance(id);
            prev = Some(id);
        }

        (glyphs, caret_x)
    }

    /// Horizontal extent of the inked and advanced area of `text`.
    fn span(&self, text: &str) -> HorizontalSpan {
        let (glyphs, advance) = self.layout(text);
        let scaled = self.font.as_scaled(self.scale);
        let outlines = glyphs.into_iter().filter_map(|glyph| {
            let bounds = scaled.outline_glyph(glyph)?.px_bounds();
            Some((bounds.min.x, bounds.max.x))
        });
        HorizontalSpan::new(advance, outlines)
    }

    /// Pixel size of the bitmap `rasterize` would produce.
    pub fn measure(&self, text: &str) -> IntrinsicSize {
        if text.is_empty() {
            return IntrinsicSize::zero();
        }
        IntrinsicSize::new(self.span(text).width as f32, self.line_height().ceil())
    }

    pub fn rasterize(&self, text: &str, color: Color) -> Result<TextBitmap, RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }

        let span = self.span(text);
        let width = span.width;
        let height = self.line_height().ceil() as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyText);
        }

        let mut coverage = vec![0.0_f32; (width * height) as usize];

        let (glyphs, _) = self.layout(text);
        let scaled = self.font.as_scaled(self.scale);
        for glyph in glyphs {
            // Whitespace has no outline
            let Some(outlined) = scaled.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let left = bounds.min.x as i32 + span.offset_x;
            let top = bounds.min.y as i32;
            outlined.draw(|x, y, v| {
                let px = left + x as i32;
                let py = top + y as i32;
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    return;
                }
                let idx = (py as u32 * width + px as u32) as usize;
                coverage[idx] = coverage[idx].max(v);
            });
        }

        let [r, g, b, a] = color.to_srgba8();
        let mut pixels = Vec::with_capacity(coverage.len() * 4);
        for v in coverage {
            let alpha = (v.clamp(0.0, 1.0) * a as f32).round() as u8;
            pixels.extend_from_slice(&[r, g, b, alpha]);
        }

        Ok(TextBitmap {
            width,
            height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_without_overhang_is_the_advance() {
        let span = HorizontalSpan::new(41.3, [(1.0, 12.0), (14.5, 40.0)]);
        assert_eq!(span, HorizontalSpan { offset_x: 0, width: 42 });
    }

    #[test]
    fn test_span_covers_negative_side_bearing() {
        let span = HorizontalSpan::new(30.0, [(-2.4, 10.0), (12.0, 29.0)]);
        assert_eq!(span.offset_x, 3);
        assert_eq!(span.width, 33);
    }

    #[test]
    fn test_span_covers_overhang_past_advance() {
        let span = HorizontalSpan::new(20.0, [(0.0, 8.0), (10.0, 23.6)]);
        assert_eq!(span, HorizontalSpan { offset_x: 0, width: 24 });
    }

    #[test]
    fn test_span_of_whitespace_is_the_advance() {
        let span = HorizontalSpan::new(6.2, std::iter::empty());
        assert_eq!(span, HorizontalSpan { offset_x: 0, width: 7 });
    }
}
