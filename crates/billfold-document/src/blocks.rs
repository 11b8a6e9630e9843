// SPDX-License-Identifier: MIT
//
// Fixed page blocks: document header with company identity and kind banner,
// customer information, footer, page-number label, continuation marker, the
// signed-QR block, and the receipt extras printed under the table.
//
// All y positions are the shipped layout; see `PageRegion` for the table
// geometry and the inline constants here for the header stack.

use billfold_core::error::Result;
use billfold_core::format::format_date;
use billfold_core::types::{Document, DocumentKind};
use billfold_core::PageRegion;
use billfold_render::{Align, ImageProvider, PageCanvas, TextStyle};
use tracing::warn;

use crate::layout::RunningOffset;

/// Logo box top, and the two company-name positions it implies.
const LOGO_TOP: f32 = 15.0;
const LOGO_HEIGHT: f32 = 30.0;
const COMPANY_NAME_WITH_LOGO: f32 = 55.0;
const COMPANY_NAME_NO_LOGO: f32 = 15.0;
/// First line of the company detail stack.
const HEADER_STACK_TOP: f32 = 65.0;
/// Spacing between stacked header lines.
const HEADER_LINE_STEP: f32 = 13.0;
/// First line of the kind banner on the right.
const BANNER_TOP: f32 = 50.0;
/// Top of the customer block, between its two rules at 140 and 230.
const CUSTOMER_TOP: f32 = 160.0;
const CUSTOMER_RULE_TOP: f32 = 140.0;
const CUSTOMER_RULE_BOTTOM: f32 = 230.0;

const ATTRIBUTION: &str = "generated by billfold";

/// Horizontal rule across the content area.
pub(crate) fn render_hr<C: PageCanvas>(canvas: &mut C, region: &PageRegion, y: f32) -> Result<()> {
    canvas.draw_rule(region.margin_left, y, region.rule_right)
}

/// Render the full document header: logo, company identity stack, and the
/// kind-specific banner on the right.
///
/// The logo is fetched on every call; page breaks re-render the header, so
/// the provider must be idempotent (and may cache). A failed or non-image
/// fetch shifts the company name up to the no-logo position — layout stays
/// consistent, nothing fails.
pub(crate) async fn render_header<C, P>(
    canvas: &mut C,
    provider: &P,
    document: &Document,
    region: &PageRegion,
) -> Result<()>
where
    C: PageCanvas,
    P: ImageProvider + ?Sized,
{
    let company = &document.company;

    let logo = provider.fetch(&company.logo).await;
    let name_y = if logo.is_valid_image {
        canvas.draw_image(
            &logo.bytes,
            region.margin_left,
            LOGO_TOP,
            None,
            Some(LOGO_HEIGHT),
        )?;
        COMPANY_NAME_WITH_LOGO
    } else {
        warn!(url = %company.logo, "logo unavailable, rendering header without it");
        COMPANY_NAME_NO_LOGO
    };

    canvas.draw_text(
        &company.name,
        region.margin_left,
        name_y,
        &TextStyle::size(12.0).bold(),
    )?;

    let style = TextStyle::size(10.0);
    let mut offset = RunningOffset::new(HEADER_STACK_TOP);
    canvas.draw_text(&company.branch, region.margin_left, offset.advance(0.0), &style)?;
    canvas.draw_text(
        &format!("RNC {}", company.rnc),
        region.margin_left,
        offset.advance(HEADER_LINE_STEP),
        &style,
    )?;
    canvas.draw_text(
        &format!("Teléfono: {}", company.phone),
        region.margin_left,
        offset.advance(HEADER_LINE_STEP),
        &style,
    )?;
    canvas.draw_text(
        &format!("Dirección: {}", company.address),
        region.margin_left,
        offset.advance(HEADER_LINE_STEP),
        &style,
    )?;
    canvas.draw_text(
        &format!("Fecha Emisión: {}", document.issue_day),
        region.margin_left,
        offset.advance(HEADER_LINE_STEP),
        &style,
    )?;

    render_kind_banner(canvas, document, region)
}

/// The top-right banner identifying the document kind and its numbers.
fn render_kind_banner<C: PageCanvas>(
    canvas: &mut C,
    document: &Document,
    region: &PageRegion,
) -> Result<()> {
    let right = |size: f32| TextStyle::size(size).align(Align::Right);
    let mut offset = RunningOffset::new(BANNER_TOP);

    match &document.kind {
        DocumentKind::Invoice {
            ncf,
            ncf_description,
            document_no,
            due_day,
        } => {
            canvas.draw_text(
                ncf_description,
                region.margin_right,
                offset.advance(0.0),
                &right(10.0).bold(),
            )?;
            canvas.draw_text(
                &format!("e-NCF: {ncf}"),
                100.0,
                offset.advance(HEADER_LINE_STEP),
                &right(10.0),
            )?;
            canvas.draw_text(
                &format!("No.Factura: {document_no}"),
                100.0,
                offset.advance(HEADER_LINE_STEP),
                &right(10.0),
            )?;
            canvas.draw_text(
                &format!("Fecha Vencimiento: {}", format_date(due_day)),
                region.margin_right,
                offset.advance(HEADER_LINE_STEP),
                &right(10.0),
            )?;
        }
        DocumentKind::Order { document_no } => {
            canvas.draw_text("Pedido", region.margin_right, offset.advance(0.0), &right(15.0).bold())?;
            canvas.draw_text(
                &format!("No. Pedido: {document_no}"),
                100.0,
                offset.advance(HEADER_LINE_STEP + 5.0),
                &right(10.0),
            )?;
        }
        DocumentKind::Quote { document_no } => {
            canvas.draw_text(
                "Cotización",
                region.margin_right,
                offset.advance(0.0),
                &right(15.0).bold(),
            )?;
            canvas.draw_text(
                &format!("No. Cotización: {document_no}"),
                100.0,
                offset.advance(HEADER_LINE_STEP + 5.0),
                &right(10.0),
            )?;
        }
        DocumentKind::Receipt {
            document_no,
            payment_type,
            reference_no,
            bank_name,
            future_check_date,
            ..
        } => {
            canvas.draw_text(
                "RECIBO DE PAGO",
                region.margin_right,
                offset.advance(0.0),
                &right(10.0).bold(),
            )?;
            canvas.draw_text(
                &format!("No.Recibo: {document_no}"),
                100.0,
                offset.advance(HEADER_LINE_STEP + 5.0),
                &right(10.0),
            )?;
            canvas.draw_text(
                &format!("Tipo Pago: {payment_type}"),
                100.0,
                offset.advance(HEADER_LINE_STEP),
                &right(10.0),
            )?;
            if let Some(bank) = bank_name {
                canvas.draw_text(
                    &format!("Banco: {bank}"),
                    100.0,
                    offset.advance(HEADER_LINE_STEP),
                    &right(10.0),
                )?;
            }
            if let Some(date) = future_check_date {
                canvas.draw_text(
                    &format!("Cheque Futurista: {date}"),
                    100.0,
                    offset.advance(HEADER_LINE_STEP),
                    &right(10.0).bold(),
                )?;
            }
            canvas.draw_text(
                &format!("No. Referencia: {reference_no}"),
                100.0,
                offset.advance(HEADER_LINE_STEP),
                &right(10.0),
            )?;
        }
    }
    Ok(())
}

/// Customer information block between its two horizontal rules.
pub(crate) fn render_customer<C: PageCanvas>(
    canvas: &mut C,
    document: &Document,
    region: &PageRegion,
) -> Result<()> {
    let customer = &document.customer;
    render_hr(canvas, region, CUSTOMER_RULE_TOP)?;

    let label = TextStyle::size(10.0);
    let emphasis = TextStyle::size(10.0).bold();
    let left = region.margin_left;
    let top = CUSTOMER_TOP;

    canvas.draw_text("Cliente:", left, top, &label)?;
    canvas.draw_text(&customer.name, 100.0, top, &emphasis)?;
    canvas.draw_text("RNC:", left, top + 15.0, &label)?;
    canvas.draw_text(&customer.rnc, 100.0, top + 15.0, &label)?;
    canvas.draw_text("Teléfono:", left, top + 30.0, &label)?;
    canvas.draw_text(&customer.phone, 100.0, top + 30.0, &label)?;
    canvas.draw_text("Dirección:", left, top + 45.0, &label)?;
    canvas.draw_text(&customer.address, 100.0, top + 45.0, &label)?;

    canvas.draw_text("Vendedor:", 300.0, top, &label)?;
    canvas.draw_text(&customer.seller, 380.0, top, &emphasis)?;
    canvas.draw_text("Email:", 300.0, top + 15.0, &label)?;
    canvas.draw_text(&customer.email, 380.0, top + 15.0, &label)?;

    render_hr(canvas, region, CUSTOMER_RULE_BOTTOM)
}

/// Centered footer: the document's message plus the attribution line.
pub(crate) fn render_footer<C: PageCanvas>(
    canvas: &mut C,
    document: &Document,
    region: &PageRegion,
) -> Result<()> {
    let style = TextStyle::size(8.0).align(Align::Center).width(500.0);
    canvas.draw_text(&document.footer_msg, 50.0, region.footer_top, &style)?;
    canvas.draw_text(ATTRIBUTION, 50.0, region.footer_top + 10.0, &style)
}

/// Small page-number label in the top-right corner.
pub(crate) fn render_page_label<C: PageCanvas>(canvas: &mut C, page: u32) -> Result<()> {
    canvas.draw_text(
        &format!("Page: {page}"),
        20.0,
        20.0,
        &TextStyle::size(7.0).align(Align::Right),
    )
}

/// Marker row signalling that the table continues on the next page.
pub(crate) fn render_continuation<C: PageCanvas>(canvas: &mut C, anchor: f32) -> Result<()> {
    canvas.draw_text(
        "============== CONTINUA ==============",
        0.0,
        anchor,
        &TextStyle::size(7.0).align(Align::Center),
    )
}

/// Signed-QR block: the QR image plus security code and signature date.
///
/// No-op when the document carries no QR URL. A failed fetch logs a warning
/// and skips the block; the render continues.
pub(crate) async fn render_signature_block<C, P>(
    canvas: &mut C,
    provider: &P,
    document: &Document,
    region: &PageRegion,
    anchor: f32,
) -> Result<()>
where
    C: PageCanvas,
    P: ImageProvider + ?Sized,
{
    let Some(url) = document.qr_code_url.as_deref() else {
        return Ok(());
    };

    let qr = provider.fetch(url).await;
    if !qr.is_valid_image {
        warn!(url, "QR code unavailable, skipping signature block");
        return Ok(());
    }

    let x = region.margin_left;
    canvas.draw_image(&qr.bytes, x, anchor, Some(49.0), Some(49.0))?;

    let style = TextStyle::size(7.0);
    let security_code = document.security_code.as_deref().unwrap_or_default();
    let signature_date = document.digital_signature_date.as_deref().unwrap_or_default();
    canvas.draw_text(
        &format!("Código de Seguridad: {security_code}"),
        x,
        anchor + 50.0,
        &style,
    )?;
    canvas.draw_text(
        &format!("Fecha de Firma Digital: {signature_date}"),
        x,
        anchor + 60.0,
        &style,
    )
}

/// Receipt-only content under the table: the post-dated cheque warning and
/// the free-form remark. No-op for other kinds.
pub(crate) fn render_receipt_extras<C: PageCanvas>(
    canvas: &mut C,
    document: &Document,
    region: &PageRegion,
    anchor: f32,
) -> Result<()> {
    let DocumentKind::Receipt {
        future_check_date,
        note,
        ..
    } = &document.kind
    else {
        return Ok(());
    };

    if let Some(date) = future_check_date {
        canvas.draw_text(
            &format!("Cheque Futurista: {date}"),
            region.margin_left,
            anchor,
            &TextStyle::size(17.0).bold(),
        )?;
    }
    if let Some(note) = note {
        canvas.draw_text(
            &format!("Observación: {note}"),
            region.margin_left,
            anchor + 50.0,
            &TextStyle::size(10.0),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_render::{DrawCommand, FontStyle, RecordingCanvas, StaticImageProvider};

    use crate::testutil;

    fn text_at<'a>(canvas: &'a RecordingCanvas, needle: &str) -> &'a DrawCommand {
        canvas
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { content, .. } if content.contains(needle)))
            .unwrap_or_else(|| panic!("no text containing {needle:?}"))
    }

    #[tokio::test]
    async fn valid_logo_shifts_company_name_down() {
        let doc = testutil::invoice(vec![]);
        let provider = testutil::provider_with_logo(&doc);
        let mut canvas = RecordingCanvas::new();
        render_header(&mut canvas, &provider, &doc, &PageRegion::default())
            .await
            .unwrap();

        assert!(canvas.has_image());
        match text_at(&canvas, &doc.company.name) {
            DrawCommand::Text { y, .. } => assert_eq!(*y, COMPANY_NAME_WITH_LOGO),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn missing_logo_uses_the_no_logo_offset() {
        let doc = testutil::invoice(vec![]);
        let provider = StaticImageProvider::new(); // nothing registered
        let mut canvas = RecordingCanvas::new();
        render_header(&mut canvas, &provider, &doc, &PageRegion::default())
            .await
            .unwrap();

        assert!(!canvas.has_image());
        match text_at(&canvas, &doc.company.name) {
            DrawCommand::Text { y, .. } => assert_eq!(*y, COMPANY_NAME_NO_LOGO),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn invoice_banner_carries_ncf_and_due_date() {
        let doc = testutil::invoice(vec![]);
        let provider = StaticImageProvider::new();
        let mut canvas = RecordingCanvas::new();
        render_header(&mut canvas, &provider, &doc, &PageRegion::default())
            .await
            .unwrap();

        text_at(&canvas, "e-NCF: E310000000001");
        text_at(&canvas, "No.Factura: F-1001");
        // Due day 2026-09-30 formatted without zero padding.
        text_at(&canvas, "Fecha Vencimiento: 2026/9/30");
    }

    #[tokio::test]
    async fn receipt_banner_includes_optional_bank_line_only_when_set() {
        let mut doc = testutil::receipt(vec![]);
        let provider = StaticImageProvider::new();

        let mut canvas = RecordingCanvas::new();
        render_header(&mut canvas, &provider, &doc, &PageRegion::default())
            .await
            .unwrap();
        assert!(!canvas.texts().iter().any(|t| t.starts_with("Banco:")));

        if let DocumentKind::Receipt { bank_name, .. } = &mut doc.kind {
            *bank_name = Some("Banco Popular".into());
        }
        let mut canvas = RecordingCanvas::new();
        render_header(&mut canvas, &provider, &doc, &PageRegion::default())
            .await
            .unwrap();
        text_at(&canvas, "Banco: Banco Popular");
    }

    #[test]
    fn customer_block_sits_between_its_rules() {
        let doc = testutil::invoice(vec![]);
        let mut canvas = RecordingCanvas::new();
        render_customer(&mut canvas, &doc, &PageRegion::default()).unwrap();

        let rules: Vec<f32> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rule { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(rules, vec![CUSTOMER_RULE_TOP, CUSTOMER_RULE_BOTTOM]);
        text_at(&canvas, "Cliente:");
        text_at(&canvas, "Vendedor:");
    }

    #[tokio::test]
    async fn signature_block_without_url_draws_nothing() {
        let doc = testutil::invoice(vec![]); // no qr_code_url
        let provider = StaticImageProvider::new();
        let mut canvas = RecordingCanvas::new();
        render_signature_block(&mut canvas, &provider, &doc, &PageRegion::default(), 400.0)
            .await
            .unwrap();
        assert!(canvas.commands().is_empty());
    }

    #[tokio::test]
    async fn signature_block_with_failed_fetch_is_skipped_not_fatal() {
        let doc = testutil::invoice_with_qr(vec![]);
        let provider = StaticImageProvider::new(); // QR url not registered
        let mut canvas = RecordingCanvas::new();
        render_signature_block(&mut canvas, &provider, &doc, &PageRegion::default(), 400.0)
            .await
            .unwrap();
        assert!(canvas.commands().is_empty());
    }

    #[tokio::test]
    async fn signature_block_draws_image_and_both_text_lines() {
        let doc = testutil::invoice_with_qr(vec![]);
        let provider = testutil::provider_with_qr(&doc);
        let mut canvas = RecordingCanvas::new();
        render_signature_block(&mut canvas, &provider, &doc, &PageRegion::default(), 400.0)
            .await
            .unwrap();

        match &canvas.commands()[0] {
            DrawCommand::Image {
                x,
                y,
                width,
                height,
                ..
            } => {
                assert_eq!((*x, *y), (20.0, 400.0));
                assert_eq!((*width, *height), (Some(49.0), Some(49.0)));
            }
            other => panic!("expected image first, got {other:?}"),
        }
        match text_at(&canvas, "Código de Seguridad: SC-42") {
            DrawCommand::Text { y, .. } => assert_eq!(*y, 450.0),
            _ => unreachable!(),
        }
        match text_at(&canvas, "Fecha de Firma Digital:") {
            DrawCommand::Text { y, .. } => assert_eq!(*y, 460.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn receipt_extras_render_cheque_label_in_large_bold() {
        let mut doc = testutil::receipt(vec![]);
        if let DocumentKind::Receipt {
            future_check_date,
            note,
            ..
        } = &mut doc.kind
        {
            *future_check_date = Some("2026/10/1".into());
            *note = Some("pago parcial".into());
        }

        let mut canvas = RecordingCanvas::new();
        render_receipt_extras(&mut canvas, &doc, &PageRegion::default(), 500.0).unwrap();

        match text_at(&canvas, "Cheque Futurista: 2026/10/1") {
            DrawCommand::Text { size, font, y, .. } => {
                assert_eq!(*size, 17.0);
                assert_eq!(*font, FontStyle::Bold);
                assert_eq!(*y, 500.0);
            }
            _ => unreachable!(),
        }
        match text_at(&canvas, "Observación: pago parcial") {
            DrawCommand::Text { y, .. } => assert_eq!(*y, 550.0),
            _ => unreachable!(),
        }
    }
}
