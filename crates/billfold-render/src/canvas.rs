// SPDX-License-Identifier: MIT
//
// The drawing-surface abstraction the layout engine renders onto.
//
// Coordinates are page-space points with the origin at the top-left corner,
// matching the layout constants in `billfold_core::PageRegion`. Backends own
// the translation into their native coordinate system.

use billfold_core::error::Result;

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Font weight. The layout only ever distinguishes regular from bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
}

/// Styling for one `draw_text` call.
///
/// `width` bounds the alignment box; when absent the box extends from `x` to
/// the right page margin. Overflow beyond the box is the backend's problem
/// (clip or wrap), never the engine's.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub font: FontStyle,
    pub align: Align,
    pub width: Option<f32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            font: FontStyle::Regular,
            align: Align::Left,
            width: None,
        }
    }
}

impl TextStyle {
    pub fn size(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.font = FontStyle::Bold;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

/// A paginated drawing surface.
///
/// One canvas instance backs one document render; it is exclusively owned by
/// that render's call stack and is not safe for concurrent writes. Draw calls
/// land on the current physical page until `new_page` starts the next one.
pub trait PageCanvas {
    /// Draw text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, content: &str, x: f32, y: f32, style: &TextStyle) -> Result<()>;

    /// Draw an encoded image (PNG/JPEG bytes) with its top-left corner at
    /// `(x, y)`, scaled to the requested width and/or height in points.
    fn draw_image(
        &mut self,
        bytes: &[u8],
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<()>;

    /// Draw a horizontal rule from `x1` to `x2` at height `y`.
    fn draw_rule(&mut self, x1: f32, y: f32, x2: f32) -> Result<()>;

    /// Close the current physical page and start a fresh one.
    fn new_page(&mut self);

    /// Finalize the document and return the encoded output bytes.
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}
