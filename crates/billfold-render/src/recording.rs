// SPDX-License-Identifier: MIT
//
// Command-recording canvas.
//
// Captures every draw call as data instead of producing output. The layout
// tests and the pagination bench assert against this log; it is also handy
// for diffing two renders when chasing layout regressions.

use billfold_core::error::Result;

use crate::canvas::{Align, FontStyle, PageCanvas, TextStyle};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        content: String,
        x: f32,
        y: f32,
        size: f32,
        font: FontStyle,
        align: Align,
        width: Option<f32>,
    },
    Image {
        bytes: Vec<u8>,
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    },
    Rule {
        x1: f32,
        y: f32,
        x2: f32,
    },
    NewPage,
}

/// `PageCanvas` that appends every call to an in-memory log.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw command log, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of physical pages the log describes.
    pub fn page_count(&self) -> usize {
        1 + self
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::NewPage))
            .count()
    }

    /// Commands grouped per physical page, split on `NewPage` markers.
    pub fn pages(&self) -> Vec<&[DrawCommand]> {
        self.commands
            .split(|c| matches!(c, DrawCommand::NewPage))
            .collect()
    }

    /// All text contents drawn, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any image draw was issued anywhere in the document.
    pub fn has_image(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Image { .. }))
    }
}

impl PageCanvas for RecordingCanvas {
    fn draw_text(&mut self, content: &str, x: f32, y: f32, style: &TextStyle) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            x,
            y,
            size: style.size,
            font: style.font,
            align: style.align,
            width: style.width,
        });
        Ok(())
    }

    fn draw_image(
        &mut self,
        bytes: &[u8],
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Image {
            bytes: bytes.to_vec(),
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn draw_rule(&mut self, x1: f32, y: f32, x2: f32) -> Result<()> {
        self.commands.push(DrawCommand::Rule { x1, y, x2 });
        Ok(())
    }

    fn new_page(&mut self) {
        self.commands.push(DrawCommand::NewPage);
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}
