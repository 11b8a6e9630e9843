// SPDX-License-Identifier: MIT
//
// Fixed page-layout geometry.
//
// Every value here is tuned to the A4 layout the billing backend has shipped
// for years. They are configuration, not derivation: changing any of them
// changes visible page layout, so they are named rather than recomputed.

use serde::{Deserialize, Serialize};

/// A4 page width in PostScript points.
pub const PAGE_WIDTH_PT: f32 = 595.28;
/// A4 page height in PostScript points.
pub const PAGE_HEIGHT_PT: f32 = 841.89;

/// Vertical layout constants shared read-only by the row layout and the
/// pagination engine. One process-wide value; `Default` is the shipped layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRegion {
    /// Left margin for text and rules.
    pub margin_left: f32,
    /// Right margin.
    pub margin_right: f32,
    /// Y offset of the table header row.
    pub table_top: f32,
    /// Vertical distance between consecutive rows.
    pub row_height: f32,
    /// Y offset of the rule below a row, relative to the row.
    pub rule_offset: f32,
    /// Y offset of the rule below the table header row, relative to the
    /// table top. One point wider than the row rule, as shipped.
    pub header_rule_offset: f32,
    /// Rows rendered on a page beyond which the page is full. The check is
    /// strictly greater-than, evaluated after the row is drawn, so a page
    /// holds `row_threshold + 1` rows.
    pub row_threshold: u32,
    /// Step used when anchoring the totals/continuation/QR blocks below the
    /// last row. Intentionally one point wider than `row_height`.
    pub anchor_step: f32,
    /// Vertical distance between rows of the totals block.
    pub totals_step: f32,
    /// Y offset of the footer message line.
    pub footer_top: f32,
    /// X coordinate where horizontal rules end.
    pub rule_right: f32,
}

impl PageRegion {
    /// Rows that fit on one physical page.
    pub fn page_capacity(&self) -> u32 {
        self.row_threshold + 1
    }
}

impl Default for PageRegion {
    fn default() -> Self {
        Self {
            margin_left: 20.0,
            margin_right: 20.0,
            table_top: 250.0,
            row_height: 19.0,
            rule_offset: 12.0,
            header_rule_offset: 13.0,
            row_threshold: 21,
            anchor_step: 20.0,
            totals_step: 15.0,
            footer_top: 780.0,
            rule_right: 570.0,
        }
    }
}
