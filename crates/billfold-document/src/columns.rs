// SPDX-License-Identifier: MIT
//
// Per-kind table profiles: column maps, header titles, and the mapping from
// a line item to its eight display cells.
//
// Sale documents (invoice/order/quote) and receipts use two distinct fixed
// column maps; the profile is selected once per render from the document
// kind, never re-branched inside the row loop.

use billfold_core::format::format_currency;
use billfold_core::types::{Document, LineItem};

/// One table column: fixed x offset and optional clip width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Column {
    pub x: f32,
    pub width: Option<f32>,
}

const fn col(x: f32, width: f32) -> Column {
    Column {
        x,
        width: Some(width),
    }
}

const fn col_open(x: f32) -> Column {
    Column { x, width: None }
}

/// Header titles plus column geometry for one table family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TableProfile {
    pub headers: [&'static str; 8],
    pub columns: [Column; 8],
}

/// Product tables: invoices, orders, quotes.
pub(crate) const SALE_PROFILE: TableProfile = TableProfile {
    headers: [
        "Cantidad",
        "Código",
        "Descripción",
        "Unidad",
        "Precio",
        "Descuento",
        "Impuesto",
        "SubTotal",
    ],
    columns: [
        col(20.0, 90.0),
        col(65.0, 90.0),
        col_open(115.0),
        col(360.0, 28.0),
        col(400.0, 90.0),
        col(440.0, 90.0),
        col(490.0, 90.0),
        col_open(530.0),
    ],
};

/// Collection tables: payment receipts referencing source documents.
pub(crate) const COLLECTION_PROFILE: TableProfile = TableProfile {
    headers: [
        "Factura",
        "Observación",
        "Descuento",
        "Impuesto",
        "SubTotal",
        "Total",
        "Fecha",
        "Total Recibido",
    ],
    columns: [
        col(20.0, 90.0),
        col(80.0, 90.0),
        col(220.0, 90.0),
        col_open(270.0),
        col(320.0, 90.0),
        col(380.0, 90.0),
        col(440.0, 90.0),
        col(510.0, 90.0),
    ],
};

/// Select the table profile for a document. Chosen once by the assembler's
/// render path, shared read-only after that.
pub(crate) fn profile_for(document: &Document) -> &'static TableProfile {
    if document.kind.is_sale() {
        &SALE_PROFILE
    } else {
        &COLLECTION_PROFILE
    }
}

/// Map a line item to its eight display cells under the given profile.
///
/// An item variant that does not match the document family renders as empty
/// cells — absent fields become empty text, never an error.
pub(crate) fn row_cells(document: &Document, item: &LineItem) -> [String; 8] {
    let locale = &document.locale;
    match (document.kind.is_sale(), item) {
        (true, LineItem::Sale(item)) => [
            display_quantity(item.quantity),
            item.code.clone(),
            item.description.clone(),
            item.unit.clone(),
            format_currency(item.amount, locale, true),
            format_currency(item.discount, locale, true),
            format_currency(item.tax, locale, true),
            format_currency(item.subtotal, locale, true),
        ],
        (false, LineItem::Collection(item)) => [
            item.document.clone(),
            item.note.clone(),
            format_currency(item.discount, locale, false),
            format_currency(item.tax, locale, false),
            format_currency(item.subtotal, locale, false),
            format_currency(item.total, locale, false),
            item.date.clone(),
            format_currency(item.collected, locale, false),
        ],
        _ => std::array::from_fn(|_| String::new()),
    }
}

/// Quantities print as plain numbers: integral values lose the trailing
/// `.0`, fractional values keep their digits.
fn display_quantity(quantity: f64) -> String {
    format!("{quantity}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_core::types::{CollectionItem, SaleItem};

    fn sale_item() -> SaleItem {
        SaleItem {
            quantity: 3.0,
            code: "A-10".into(),
            description: "Botellón".into(),
            unit: "UN".into(),
            amount: 125.0,
            discount: 0.0,
            tax: 22.5,
            subtotal: 375.0,
        }
    }

    fn invoice_doc(items: Vec<LineItem>) -> Document {
        crate::testutil::invoice(items)
    }

    #[test]
    fn sale_rows_format_currency_with_symbol() {
        let doc = invoice_doc(vec![]);
        let cells = row_cells(&doc, &LineItem::Sale(sale_item()));
        assert_eq!(cells[0], "3");
        assert_eq!(cells[1], "A-10");
        assert_eq!(cells[4], "$125.00");
        assert_eq!(cells[7], "$375.00");
    }

    #[test]
    fn collection_rows_format_currency_without_symbol() {
        let doc = crate::testutil::receipt(vec![]);
        let item = LineItem::Collection(CollectionItem {
            document: "F-88".into(),
            note: "abono".into(),
            discount: 10.0,
            tax: 18.0,
            subtotal: 100.0,
            total: 118.0,
            date: "2026/8/1".into(),
            collected: 108.0,
        });
        let cells = row_cells(&doc, &item);
        assert_eq!(cells[0], "F-88");
        assert_eq!(cells[2], "10.00");
        assert_eq!(cells[7], "108.00");
    }

    #[test]
    fn mismatched_item_variant_renders_empty_cells() {
        let doc = invoice_doc(vec![]);
        let item = LineItem::Collection(CollectionItem {
            document: "F-1".into(),
            note: String::new(),
            discount: 0.0,
            tax: 0.0,
            subtotal: 0.0,
            total: 0.0,
            date: String::new(),
            collected: 0.0,
        });
        let cells = row_cells(&doc, &item);
        assert!(cells.iter().all(String::is_empty));
    }

    #[test]
    fn fractional_quantities_keep_their_digits() {
        assert_eq!(display_quantity(2.0), "2");
        assert_eq!(display_quantity(2.5), "2.5");
    }

    #[test]
    fn profiles_differ_between_families() {
        let invoice = invoice_doc(vec![]);
        let receipt = crate::testutil::receipt(vec![]);
        assert_eq!(profile_for(&invoice), &SALE_PROFILE);
        assert_eq!(profile_for(&receipt), &COLLECTION_PROFILE);
        assert_ne!(SALE_PROFILE.columns, COLLECTION_PROFILE.columns);
    }
}
