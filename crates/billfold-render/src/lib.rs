// SPDX-License-Identifier: MIT
//
// billfold-render — Rendering collaborators for the Billfold engine.
//
// Provides the `PageCanvas` drawing surface abstraction, its printpdf-backed
// implementation, a command-recording canvas for tests and benches, and the
// async `ImageProvider` used for logo and signed-QR fetches.

pub mod canvas;
pub mod fetch;
pub mod pdf;
pub mod recording;

pub use canvas::{Align, FontStyle, PageCanvas, TextStyle};
pub use fetch::{FetchedImage, HttpImageProvider, ImageProvider, StaticImageProvider};
pub use pdf::PdfCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
