// SPDX-License-Identifier: MIT
//
// The pagination engine: walks the item sequence, tracks the row cursor,
// decides page breaks, and orchestrates the repeated header/table-header
// blocks and continuation markers around each break.

use billfold_core::PageRegion;
use billfold_core::error::Result;
use billfold_core::types::Document;
use billfold_render::{FontStyle, ImageProvider, PageCanvas};
use tracing::debug;

use crate::blocks::{
    render_continuation, render_customer, render_footer, render_header, render_hr,
    render_page_label, render_receipt_extras, render_signature_block,
};
use crate::columns::{TableProfile, profile_for, row_cells};
use crate::layout::{Cursor, render_row};
use crate::totals::render_totals;

/// Lays a document's line items out over as many physical pages as needed.
///
/// The engine performs no validation: well-formed input cannot fail it, and
/// the only errors it returns are propagated canvas failures. Items render
/// in their original order; an empty sequence still renders the table header
/// and drops straight into the totals block.
pub struct PaginationEngine<'a, P: ImageProvider + ?Sized> {
    provider: &'a P,
    region: &'a PageRegion,
}

impl<'a, P: ImageProvider + ?Sized> PaginationEngine<'a, P> {
    pub fn new(provider: &'a P, region: &'a PageRegion) -> Self {
        Self { provider, region }
    }

    /// Render the line-item table, breaking pages as they fill.
    ///
    /// A page is full once it holds `region.page_capacity()` rows; the row
    /// that fills it stays on it, and the break happens before the next item
    /// is processed. Each break closes the page with a page label, the
    /// totals-so-far, a continuation marker, the footer, and the signature
    /// block, then reopens on a fresh page with the full header, customer
    /// block, and table header. The final totals and signature block land
    /// below the last row actually rendered.
    pub async fn render_table<C: PageCanvas>(
        &self,
        canvas: &mut C,
        document: &Document,
    ) -> Result<()> {
        let region = self.region;
        let profile = profile_for(document);

        self.render_table_header(canvas, profile)?;

        let mut cursor = Cursor::new();
        for item in &document.items {
            let y = cursor.row_y(region);
            let cells = row_cells(document, item);
            render_row(canvas, y, &cells, &profile.columns, FontStyle::Regular)?;
            render_hr(canvas, region, y + region.rule_offset)?;
            cursor.advance();

            if cursor.page_full(region) {
                let anchor = cursor.anchor_y(region);
                render_page_label(canvas, cursor.page())?;
                render_totals(canvas, document, region, anchor)?;
                render_continuation(canvas, anchor)?;
                render_footer(canvas, document, region)?;
                render_signature_block(canvas, self.provider, document, region, anchor).await?;

                canvas.new_page();
                cursor.break_page();
                debug!(page = cursor.page(), "page break");

                render_page_label(canvas, cursor.page())?;
                render_header(canvas, self.provider, document, region).await?;
                render_customer(canvas, document, region)?;
                self.render_table_header(canvas, profile)?;
            }
        }

        let anchor = cursor.anchor_y(region);
        render_receipt_extras(canvas, document, region, anchor)?;
        render_totals(canvas, document, region, anchor)?;
        render_signature_block(canvas, self.provider, document, region, anchor).await
    }

    /// Bold column titles at the table top, with the rule below them.
    fn render_table_header<C: PageCanvas>(
        &self,
        canvas: &mut C,
        profile: &TableProfile,
    ) -> Result<()> {
        let region = self.region;
        let titles: [String; 8] = std::array::from_fn(|i| profile.headers[i].to_string());
        render_row(
            canvas,
            region.table_top,
            &titles,
            &profile.columns,
            FontStyle::Bold,
        )?;
        render_hr(canvas, region, region.table_top + region.header_rule_offset)
    }
}
