// SPDX-License-Identifier: MIT
//
// Shared test fixtures: documents, item runs, and static image providers.

use billfold_core::types::{
    CollectionItem, Company, Customer, Document, DocumentKind, LineItem, LocaleConfig, SaleItem,
    Totals,
};
use billfold_render::StaticImageProvider;

pub(crate) const LOGO_URL: &str = "mem://company/logo.png";
pub(crate) const QR_URL: &str = "mem://dgii/qr.png";

fn company() -> Company {
    Company {
        name: "Distribuidora Norte SRL".into(),
        branch: "Sucursal Central".into(),
        rnc: "101-00001-1".into(),
        phone: "809-555-0100".into(),
        address: "Av. Principal 1, Santo Domingo".into(),
        logo: LOGO_URL.into(),
    }
}

fn customer() -> Customer {
    Customer {
        name: "Colmado La Luz".into(),
        rnc: "131-00002-2".into(),
        phone: "809-555-0200".into(),
        address: "Calle Segunda 14".into(),
        seller: "M. Pérez".into(),
        email: "compras@colmadolaluz.do".into(),
    }
}

pub(crate) fn sale_items(n: usize) -> Vec<LineItem> {
    (0..n)
        .map(|i| {
            LineItem::Sale(SaleItem {
                quantity: (i % 5 + 1) as f64,
                code: format!("P-{i:03}"),
                description: format!("Item {i}"),
                unit: "UN".into(),
                amount: 100.0 + i as f64,
                discount: 0.0,
                tax: 18.0,
                subtotal: 118.0 + i as f64,
            })
        })
        .collect()
}

pub(crate) fn collection_items(n: usize) -> Vec<LineItem> {
    (0..n)
        .map(|i| {
            LineItem::Collection(CollectionItem {
                document: format!("F-{i:04}"),
                note: format!("abono {i}"),
                discount: 5.0,
                tax: 18.0,
                subtotal: 100.0,
                total: 118.0,
                date: "2026/8/1".into(),
                collected: 113.0,
            })
        })
        .collect()
}

pub(crate) fn invoice(items: Vec<LineItem>) -> Document {
    Document {
        kind: DocumentKind::Invoice {
            ncf: "E310000000001".into(),
            ncf_description: "Factura de Crédito Fiscal Electrónica".into(),
            document_no: "F-1001".into(),
            due_day: "2026-09-30".into(),
        },
        company: company(),
        customer: customer(),
        issue_day: "2026-08-29".into(),
        items,
        totals: Totals::Sale {
            subtotal: 1000.0,
            discount: 50.0,
            tax: 180.0,
            total: 1130.0,
        },
        footer_msg: "Gracias por su compra".into(),
        qr_code_url: None,
        security_code: None,
        digital_signature_date: None,
        locale: LocaleConfig::default(),
    }
}

pub(crate) fn invoice_with_qr(items: Vec<LineItem>) -> Document {
    let mut doc = invoice(items);
    doc.qr_code_url = Some(QR_URL.into());
    doc.security_code = Some("SC-42".into());
    doc.digital_signature_date = Some("2026-08-29 10:00:00".into());
    doc
}

pub(crate) fn receipt(items: Vec<LineItem>) -> Document {
    Document {
        kind: DocumentKind::Receipt {
            document_no: "R-55".into(),
            payment_type: "Efectivo".into(),
            reference_no: "REF-000123".into(),
            bank_name: None,
            future_check_date: None,
            note: None,
        },
        company: company(),
        customer: customer(),
        issue_day: "2026-08-29".into(),
        items,
        totals: Totals::Collection {
            total_collected: 500.0,
            discount_total: 25.0,
        },
        footer_msg: "Recibo de pago".into(),
        qr_code_url: None,
        security_code: None,
        digital_signature_date: None,
        locale: LocaleConfig::default(),
    }
}

/// Provider serving the document's logo URL; the bytes only need to be
/// stable, the recording canvas never decodes them.
pub(crate) fn provider_with_logo(document: &Document) -> StaticImageProvider {
    StaticImageProvider::new().with_image(document.company.logo.clone(), b"logo-bytes".to_vec())
}

pub(crate) fn provider_with_qr(document: &Document) -> StaticImageProvider {
    let url = document.qr_code_url.clone().expect("fixture has a QR url");
    StaticImageProvider::new().with_image(url, b"qr-bytes".to_vec())
}

pub(crate) fn provider_with_logo_and_qr(document: &Document) -> StaticImageProvider {
    let url = document.qr_code_url.clone().expect("fixture has a QR url");
    provider_with_logo(document).with_image(url, b"qr-bytes".to_vec())
}
