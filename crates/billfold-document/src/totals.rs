// SPDX-License-Identifier: MIT
//
// The totals block: a fixed stack of labeled aggregate rows anchored below
// the last rendered table row.
//
// Values come straight from the document's aggregate fields; nothing here
// recomputes them from the items. The single derived figure is the receipt
// display subtotal (collected minus discounts), which is never stored.

use billfold_core::PageRegion;
use billfold_core::error::Result;
use billfold_core::format::format_currency;
use billfold_core::types::{Document, Totals};
use billfold_render::{FontStyle, PageCanvas};

use crate::columns::profile_for;
use crate::layout::render_row;

/// Render the totals stack at `anchor`, one row per aggregate, stepping
/// `totals_step` down, with the final row emphasized.
pub(crate) fn render_totals<C: PageCanvas>(
    canvas: &mut C,
    document: &Document,
    region: &PageRegion,
    anchor: f32,
) -> Result<()> {
    let locale = &document.locale;
    let money = |amount: f64| format_currency(amount, locale, true);

    let rows: Vec<(&str, String)> = match document.totals {
        Totals::Sale {
            subtotal,
            discount,
            tax,
            total,
        } => vec![
            ("Subtotal", money(subtotal)),
            ("Descuento", money(discount)),
            ("Impuesto", money(tax)),
            ("Total", money(total)),
        ],
        Totals::Collection {
            total_collected,
            discount_total,
        } => vec![
            ("Sub Total:", money(total_collected - discount_total)),
            ("Total Descuentos:", money(discount_total)),
            ("Total Cobrado:", money(total_collected)),
        ],
    };

    let columns = &profile_for(document).columns;
    let last = rows.len() - 1;
    for (i, (label, value)) in rows.into_iter().enumerate() {
        let y = anchor + i as f32 * region.totals_step;
        let font = if i == last {
            FontStyle::Bold
        } else {
            FontStyle::Regular
        };
        let mut cells: [String; 8] = std::array::from_fn(|_| String::new());
        cells[5] = label.to_string();
        cells[7] = value;
        render_row(canvas, y, &cells, columns, font)?;
    }
    Ok(())
}
