// SPDX-License-Identifier: MIT
//
// Row positioning primitives: the table cursor, a running vertical offset
// for stacked header lines, and the fixed-column row renderer.

use billfold_core::PageRegion;
use billfold_core::error::Result;
use billfold_render::{FontStyle, PageCanvas, TextStyle};

use crate::columns::Column;

/// Engine-internal position within one table render.
///
/// `rows` counts rows already drawn on the current physical page; `page` is
/// the 1-based physical page number. Created when the table render starts,
/// reset by `break_page` at every page break, discarded when the table is
/// done. Never shared: exactly one cursor per render call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    rows: u32,
    page: u32,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self { rows: 0, page: 1 }
    }

    pub(crate) fn page(&self) -> u32 {
        self.page
    }

    /// Y position for the next row: the slot below the rows already drawn.
    pub(crate) fn row_y(&self, region: &PageRegion) -> f32 {
        region.table_top + (self.rows + 1) as f32 * region.row_height
    }

    /// Anchor for the totals/continuation/QR blocks, one `anchor_step` slot
    /// below the rows already drawn.
    pub(crate) fn anchor_y(&self, region: &PageRegion) -> f32 {
        region.table_top + (self.rows + 1) as f32 * region.anchor_step
    }

    /// Record one drawn row.
    pub(crate) fn advance(&mut self) {
        self.rows += 1;
    }

    /// Whether the current page is full. Strictly greater-than, evaluated
    /// after the row is drawn: the row that fills the page stays on it.
    pub(crate) fn page_full(&self, region: &PageRegion) -> bool {
        self.rows > region.row_threshold
    }

    /// Start counting rows on a fresh page.
    pub(crate) fn break_page(&mut self) {
        self.rows = 0;
        self.page += 1;
    }
}

/// Mutable vertical offset for stacked text lines in the header blocks.
///
/// `advance(delta)` moves down by `delta` and returns the new position, so
/// `advance(0.0)` reads the starting line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningOffset(f32);

impl RunningOffset {
    pub(crate) fn new(start: f32) -> Self {
        Self(start)
    }

    pub(crate) fn advance(&mut self, delta: f32) -> f32 {
        self.0 += delta;
        self.0
    }
}

/// Render one table row: eight cells at the column map's fixed x offsets.
///
/// Cell overflow past a column width is the canvas's concern (clipping or
/// wrapping), not handled here.
pub(crate) fn render_row<C: PageCanvas>(
    canvas: &mut C,
    y: f32,
    cells: &[String; 8],
    columns: &[Column; 8],
    font: FontStyle,
) -> Result<()> {
    for (cell, column) in cells.iter().zip(columns.iter()) {
        let mut style = TextStyle::size(8.0);
        style.font = font;
        style.width = column.width;
        canvas.draw_text(cell, column.x, y, &style)?;
    }
    Ok(())
}
