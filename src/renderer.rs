//! View renderers
//!
//! A renderer takes a composed [`Frame`] and puts it on an output device.
//! The explorer ships a plain terminal renderer; tests record frames instead.

use crate::presentation::{Body, CardDescriptor, Frame};
use std::io::{self, Write};
use thiserror::Error;

/// Errors that can occur while rendering a frame
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output device failed
    #[error("Failed to write frame: {0}")]
    Io(#[from] io::Error),
}

/// Trait for anything that can display a frame.
///
/// Each call replaces whatever the previous call displayed.
pub trait ViewRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError>;

    /// Displays usage text next to the frames.
    fn show_help(&mut self, text: &str) -> Result<(), RenderError>;
}

/// Renders frames as plain text to a writer.
///
/// Summaries are converted from HTML to text and wrapped to `summary_width`
/// columns.
pub struct TerminalRenderer<W: Write> {
    out: W,
    summary_width: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, summary_width: usize) -> Self {
        Self {
            out,
            summary_width: summary_width.max(20),
        }
    }

    /// Consumes the renderer and hands back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one card: header line, wrapped summary, image and link.
    fn render_card(&mut self, card: &CardDescriptor) -> io::Result<()> {
        writeln!(self.out, "[{}] {} · {}", card.key, card.code, card.title)?;
        for line in summary_lines(&card.summary_html, self.summary_width) {
            writeln!(self.out, "    {}", line)?;
        }
        writeln!(self.out, "    image: {} ({})", card.image_url, card.image_alt)?;
        writeln!(self.out, "    link:  {}", card.link_url)?;
        writeln!(self.out)
    }
}

impl<W: Write> ViewRenderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        writeln!(self.out, "\n{}", "=".repeat(self.summary_width + 4))?;

        if let Some(banner) = frame.banner {
            writeln!(self.out, "{}", banner)?;
        }
        if let Some(indicator) = frame.indicator {
            writeln!(self.out, "{}", indicator.message())?;
        }

        writeln!(
            self.out,
            "Show: {}  |  Episode: {}",
            frame.show_dropdown.selected_label(),
            frame.episode_dropdown.selected_label()
        )?;
        writeln!(self.out, "{}\n", frame.status_line)?;

        match &frame.body {
            Body::Placeholder(message) => writeln!(self.out, "{}", message)?,
            Body::Cards(cards) => {
                for card in cards {
                    self.render_card(card)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn show_help(&mut self, text: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{}\n", text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Converts summary markup to plain text wrapped to `width` display columns.
fn summary_lines(summary_html: &str, width: usize) -> Vec<String> {
    let summary = nanohtml2text::html2text(summary_html);
    textwrap::wrap(summary.trim(), width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
