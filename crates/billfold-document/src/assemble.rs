// SPDX-License-Identifier: MIT
//
// Top-level document assembly: the fixed block sequence around the table,
// plus the output sinks.

use std::io::Write;
use std::path::Path;

use billfold_core::PageRegion;
use billfold_core::error::Result;
use billfold_core::types::{Document, DocumentKind};
use billfold_render::{ImageProvider, PageCanvas, PdfCanvas};
use tracing::{info, instrument};

use crate::blocks::{render_customer, render_footer, render_header};
use crate::table::PaginationEngine;

/// Renders complete documents in the fixed sequence: header, customer
/// block, paginated item table, footer.
///
/// One assembler may serve many renders concurrently; each render owns its
/// canvas and cursor, so no synchronisation is involved.
pub struct DocumentAssembler<P: ImageProvider> {
    provider: P,
    region: PageRegion,
}

impl<P: ImageProvider> DocumentAssembler<P> {
    /// Assembler with the shipped A4 layout.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            region: PageRegion::default(),
        }
    }

    /// Override the page geometry. Altering it changes visible layout.
    pub fn with_region(mut self, region: PageRegion) -> Self {
        self.region = region;
        self
    }

    /// Render onto a caller-owned canvas.
    #[instrument(skip_all, fields(document_no = document.kind.document_no()))]
    pub async fn render<C: PageCanvas>(&self, canvas: &mut C, document: &Document) -> Result<()> {
        render_header(canvas, &self.provider, document, &self.region).await?;
        render_customer(canvas, document, &self.region)?;
        PaginationEngine::new(&self.provider, &self.region)
            .render_table(canvas, document)
            .await?;
        render_footer(canvas, document, &self.region)?;
        info!(items = document.items.len(), "document assembled");
        Ok(())
    }

    /// Render to finished PDF bytes.
    pub async fn render_pdf(&self, document: &Document) -> Result<Vec<u8>> {
        let mut canvas = PdfCanvas::new(&pdf_title(document));
        self.render(&mut canvas, document).await?;
        canvas.finish()
    }

    /// Render into an injected writable stream. Resolves once every byte is
    /// flushed; write failures surface as errors.
    pub async fn render_to_writer<W: Write>(
        &self,
        document: &Document,
        mut writer: W,
    ) -> Result<()> {
        let bytes = self.render_pdf(document).await?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Render to a named file.
    pub async fn render_to_file(
        &self,
        document: &Document,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_pdf(document).await?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(path = %path.as_ref().display(), bytes = bytes.len(), "wrote document PDF");
        Ok(())
    }
}

/// /Info title for the PDF metadata.
fn pdf_title(document: &Document) -> String {
    let kind = match &document.kind {
        DocumentKind::Invoice { .. } => "Factura",
        DocumentKind::Order { .. } => "Pedido",
        DocumentKind::Quote { .. } => "Cotización",
        DocumentKind::Receipt { .. } => "Recibo",
    };
    format!("{kind} {}", document.kind.document_no())
}
