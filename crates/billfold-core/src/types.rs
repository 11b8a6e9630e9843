// SPDX-License-Identifier: MIT
//
// Core domain types for Billfold documents.
//
// Field names serialize in camelCase: document payloads arrive as the same
// JSON the billing backend has always produced.

use serde::{Deserialize, Serialize};

/// The kind of document being rendered, with its kind-specific header data.
///
/// Each variant carries exactly the fields its top-right header banner needs;
/// the pagination engine itself never branches on the variant beyond picking
/// a column map and banner renderer once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "documentType", rename_all = "camelCase")]
pub enum DocumentKind {
    #[serde(rename_all = "camelCase")]
    Invoice {
        /// Fiscal receipt number (NCF) assigned by the tax authority.
        ncf: String,
        /// Human-readable description of the NCF series.
        ncf_description: String,
        document_no: String,
        /// Due date, ISO-8601 or `YYYY-MM-DD`.
        due_day: String,
    },
    #[serde(rename_all = "camelCase")]
    Order { document_no: String },
    #[serde(rename_all = "camelCase")]
    Quote { document_no: String },
    #[serde(rename_all = "camelCase")]
    Receipt {
        document_no: String,
        payment_type: String,
        reference_no: String,
        #[serde(default)]
        bank_name: Option<String>,
        /// Post-dated cheque date; presence switches on the bold warning
        /// banner and the large label under the table.
        #[serde(default)]
        future_check_date: Option<String>,
        /// Free-form remark printed under the table.
        #[serde(default)]
        note: Option<String>,
    },
}

impl DocumentKind {
    /// Whether this kind bills products (invoice/order/quote) as opposed to
    /// collecting payments against prior documents (receipt).
    pub fn is_sale(&self) -> bool {
        !matches!(self, Self::Receipt { .. })
    }

    /// The document number every kind carries.
    pub fn document_no(&self) -> &str {
        match self {
            Self::Invoice { document_no, .. }
            | Self::Order { document_no }
            | Self::Quote { document_no }
            | Self::Receipt { document_no, .. } => document_no,
        }
    }
}

/// Issuing company identity printed in the page header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub branch: String,
    /// Tax registration number.
    pub rnc: String,
    pub phone: String,
    pub address: String,
    /// Logo image URL; fetched once per physical page.
    pub logo: String,
}

/// Customer block printed under the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub rnc: String,
    pub phone: String,
    pub address: String,
    pub seller: String,
    pub email: String,
}

/// Currency code plus formatting locale for display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// BCP 47 locale tag, e.g. `en-US` or `es-DO`.
    pub code: String,
    /// ISO 4217 currency code, e.g. `USD` or `DOP`.
    pub currency: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            code: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

/// One row of the document table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    /// A billed product line (invoice, order, quote).
    Sale(SaleItem),
    /// A collected source document line (receipt).
    Collection(CollectionItem),
}

/// Product line for invoices, orders, and quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub quantity: f64,
    /// Product code.
    #[serde(rename = "item")]
    pub code: String,
    pub description: String,
    pub unit: String,
    /// Unit price.
    pub amount: f64,
    pub discount: f64,
    pub tax: f64,
    pub subtotal: f64,
}

/// Payment line for receipts, referencing the document being collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    /// Source document number (the invoice being paid).
    pub document: String,
    pub note: String,
    pub discount: f64,
    pub tax: f64,
    pub subtotal: f64,
    pub total: f64,
    pub date: String,
    /// Amount collected against the source document.
    pub collected: f64,
}

/// Caller-supplied aggregate totals.
///
/// The engine renders these verbatim and never recomputes them from the
/// items; nothing enforces that they match the line sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Totals {
    #[serde(rename_all = "camelCase")]
    Sale {
        subtotal: f64,
        discount: f64,
        tax: f64,
        total: f64,
    },
    #[serde(rename_all = "camelCase")]
    Collection {
        total_collected: f64,
        discount_total: f64,
    },
}

impl Totals {
    pub fn zero_sale() -> Self {
        Self::Sale {
            subtotal: 0.0,
            discount: 0.0,
            tax: 0.0,
            total: 0.0,
        }
    }
}

/// A complete renderable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(flatten)]
    pub kind: DocumentKind,
    pub company: Company,
    pub customer: Customer,
    /// Issue date, printed as received.
    pub issue_day: String,
    /// Table rows, rendered in this exact order. May be empty.
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(flatten)]
    pub totals: Totals,
    pub footer_msg: String,
    /// Signed-QR image URL; absence disables the signature block entirely.
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub security_code: Option<String>,
    #[serde(default)]
    pub digital_signature_date: Option<String>,
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Document {
    /// Parse a document from the backend's JSON payload.
    pub fn from_json(payload: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
