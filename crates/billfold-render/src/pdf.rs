// SPDX-License-Identifier: MIT
//
// PDF canvas — `PageCanvas` backend on `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Pages here accumulate ops until `new_page`/`finish`
// seals them.

use billfold_core::config::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use billfold_core::error::{BillfoldError, Result};
use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Pt, RawImage, RawImageData, RawImageFormat, Rgb, TextItem, XObjectTransform,
};
use tracing::debug;

use crate::canvas::{Align, FontStyle, PageCanvas, TextStyle};

/// Text fill colour used across all documents (dark grey, #444444).
const TEXT_GREY: f32 = 0x44 as f32 / 255.0;
/// Rule stroke colour (#aaaaaa).
const RULE_GREY: f32 = 0xaa as f32 / 255.0;
/// Default right boundary for alignment boxes without an explicit width.
const PAGE_MARGIN: f32 = 20.0;
/// Average Helvetica glyph width as a fraction of the font size. Used only
/// to place right- and centre-aligned text; matches pdfkit output closely
/// enough for the fixed column layout.
const AVG_GLYPH_FRACTION: f32 = 0.5;

/// `PageCanvas` implementation producing a PDF byte stream.
///
/// Top-left page coordinates are converted to PDF's bottom-left space at
/// draw time. Only the built-in Helvetica faces are used, so no fonts are
/// embedded and output stays deterministic byte-for-byte.
pub struct PdfCanvas {
    doc: PdfDocument,
    sealed_pages: Vec<PdfPage>,
    ops: Vec<Op>,
}

impl PdfCanvas {
    /// Create a canvas for a new A4 document with the given /Info title.
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            sealed_pages: Vec::new(),
            ops: Vec::new(),
        }
    }

    fn page_size() -> (Mm, Mm) {
        // A4; PAGE_WIDTH_PT / PAGE_HEIGHT_PT are the same size in points.
        (Mm(210.0), Mm(297.0))
    }

    fn seal_current_page(&mut self) {
        let (w, h) = Self::page_size();
        let ops = std::mem::take(&mut self.ops);
        self.sealed_pages.push(PdfPage::new(w, h, ops));
    }

    fn builtin_font(font: FontStyle) -> BuiltinFont {
        match font {
            FontStyle::Regular => BuiltinFont::Helvetica,
            FontStyle::Bold => BuiltinFont::HelveticaBold,
        }
    }

    /// Resolve the draw x for aligned text within its box.
    fn aligned_x(&self, content: &str, x: f32, style: &TextStyle) -> f32 {
        let box_width = style
            .width
            .unwrap_or_else(|| (PAGE_WIDTH_PT - PAGE_MARGIN - x).max(0.0));
        let estimated = content.chars().count() as f32 * AVG_GLYPH_FRACTION * style.size;
        match style.align {
            Align::Left => x,
            Align::Center => x + ((box_width - estimated) / 2.0).max(0.0),
            Align::Right => x + (box_width - estimated).max(0.0),
        }
    }
}

impl PageCanvas for PdfCanvas {
    fn draw_text(&mut self, content: &str, x: f32, y: f32, style: &TextStyle) -> Result<()> {
        let font = Self::builtin_font(style.font);
        let draw_x = self.aligned_x(content, x, style);
        // Top-left text coordinate to a baseline in PDF space.
        let baseline_y = PAGE_HEIGHT_PT - y - style.size;

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: Pt(draw_x),
                y: Pt(baseline_y),
            },
        });
        self.ops.push(Op::SetFillColor {
            col: Color::Rgb(Rgb {
                r: TEXT_GREY,
                g: TEXT_GREY,
                b: TEXT_GREY,
                icc_profile: None,
            }),
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(style.size),
            font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(content.to_string())],
            font,
        });
        self.ops.push(Op::EndTextSection);
        Ok(())
    }

    fn draw_image(
        &mut self,
        bytes: &[u8],
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<()> {
        let dynamic_image = ::image::load_from_memory(bytes)
            .map_err(|err| BillfoldError::ImageDecode(err.to_string()))?;

        let img_width = dynamic_image.width() as usize;
        let img_height = dynamic_image.height() as usize;

        let rgb_image = dynamic_image.to_rgb8();
        let raw = RawImage {
            pixels: RawImageData::U8(rgb_image.into_raw()),
            width: img_width,
            height: img_height,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = self.doc.add_image(&raw);

        // At 72 dpi the native placement size in points equals the pixel
        // size, so scale factors come straight from the requested box.
        let (scale_x, scale_y) = match (width, height) {
            (Some(w), Some(h)) => (w / img_width as f32, h / img_height as f32),
            (Some(w), None) => {
                let s = w / img_width as f32;
                (s, s)
            }
            (None, Some(h)) => {
                let s = h / img_height as f32;
                (s, s)
            }
            (None, None) => (1.0, 1.0),
        };
        let rendered_h = img_height as f32 * scale_y;

        self.ops.push(Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(x)),
                translate_y: Some(Pt(PAGE_HEIGHT_PT - y - rendered_h)),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(72.0),
                rotate: None,
            },
        });

        debug!(img_width, img_height, scale_x, scale_y, "image placed");
        Ok(())
    }

    fn draw_rule(&mut self, x1: f32, y: f32, x2: f32) -> Result<()> {
        let pdf_y = Pt(PAGE_HEIGHT_PT - y);
        self.ops.push(Op::SetOutlineColor {
            col: Color::Rgb(Rgb {
                r: RULE_GREY,
                g: RULE_GREY,
                b: RULE_GREY,
                icc_profile: None,
            }),
        });
        self.ops.push(Op::SetOutlineThickness { pt: Pt(1.0) });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: Point {
                            x: Pt(x1),
                            y: pdf_y,
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Pt(x2),
                            y: pdf_y,
                        },
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        });
        Ok(())
    }

    fn new_page(&mut self) {
        self.seal_current_page();
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.seal_current_page();

        let page_count = self.sealed_pages.len();
        self.doc.with_pages(std::mem::take(&mut self.sealed_pages));

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = self.doc.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(page_count, bytes = output.len(), "PDF serialised");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_canvas_still_produces_a_pdf() {
        let canvas = PdfCanvas::new("empty");
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn text_and_rules_serialise() {
        let mut canvas = PdfCanvas::new("smoke");
        canvas
            .draw_text("Factura", 20.0, 50.0, &TextStyle::size(12.0).bold())
            .unwrap();
        canvas.draw_rule(20.0, 140.0, 570.0).unwrap();
        canvas.new_page();
        canvas
            .draw_text("Page 2", 20.0, 20.0, &TextStyle::default())
            .unwrap();
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn right_alignment_shifts_within_the_box() {
        let canvas = PdfCanvas::new("align");
        let style = TextStyle::size(10.0).align(Align::Right).width(90.0);
        let x = canvas.aligned_x("abc", 100.0, &style);
        assert!(x > 100.0);
        assert!(x <= 190.0);
    }

    #[test]
    fn undecodable_image_is_an_error() {
        let mut canvas = PdfCanvas::new("bad image");
        let err = canvas
            .draw_image(b"not an image", 20.0, 15.0, None, Some(30.0))
            .unwrap_err();
        assert!(matches!(err, BillfoldError::ImageDecode(_)));
    }
}
