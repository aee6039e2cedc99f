//! Terminal rendering of diagnostics.
//!
//! The [`Emitter`] turns a [`Diagnostic`] plus the source buffer it points
//! into four lines of text:
//!
//! ```text
//! demo.ind:3:9:
//! error: unterminated string literal [E0002]
//!     x = "abc
//!         ^^^^
//! ```
//!
//! The caret line copies every tab that precedes the span on its source
//! line, so the carets stay aligned whatever tab width the terminal uses.

use std::io::{self, IsTerminal, Write};

use super::{ColorConfig, Diagnostic};
use crate::error::{DiagnosticError, DiagnosticResult};
use crate::Span;

const RESET: &str = "\x1b[0m";

/// The source line a span starts on, with the span located inside it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet<'a> {
    /// The source line content, without its newline
    pub line: &'a [u8],
    /// Line number (1-based)
    pub line_number: u32,
    /// Byte offset of the span start within `line`
    pub start_in_line: usize,
    /// Number of carets to draw (at least 1)
    pub underline_len: usize,
}

impl<'a> SourceSnippet<'a> {
    /// Locate `span` in `source`.
    ///
    /// The line runs from the byte after the previous `\n` up to the next
    /// `\n` or the end of the buffer. The underline is clipped to the end of
    /// that line and is never shorter than one caret.
    pub fn from_span(source: &'a [u8], span: Span) -> DiagnosticResult<Self> {
        if span.start > span.end {
            return Err(DiagnosticError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > source.len() {
            return Err(DiagnosticError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }

        let line_start = source[..span.start]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        let line_end = source[span.start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(source.len(), |offset| span.start + offset);

        let visible_end = span.end.min(line_end);
        Ok(Self {
            line: &source[line_start..line_end],
            line_number: span.line,
            start_in_line: span.start - line_start,
            underline_len: visible_end.saturating_sub(span.start).max(1),
        })
    }

    /// 1-based byte column of the span start
    #[inline]
    pub fn column(&self) -> usize {
        self.start_in_line + 1
    }

    /// Whitespace that lines the carets up under the span.
    ///
    /// Tabs are kept as tabs, UTF-8 continuation bytes are skipped so every
    /// character takes one column, everything else becomes a space.
    pub fn caret_padding(&self) -> String {
        self.line[..self.start_in_line]
            .iter()
            .filter(|&&b| !(0x80..0xc0).contains(&b))
            .map(|&b| if b == b'\t' { '\t' } else { ' ' })
            .collect()
    }
}

/// Renders diagnostics with or without ANSI colors
#[derive(Clone, Copy, Debug, Default)]
pub struct Emitter {
    color: bool,
}

impl Emitter {
    /// Create an emitter whose color choice is resolved against stderr
    pub fn new(config: ColorConfig) -> Self {
        Self::with_terminal(config, io::stderr().is_terminal())
    }

    /// Create an emitter, stating whether the target is a terminal
    ///
    /// # Examples
    ///
    /// ```
    /// use indc_util::diagnostic::{ColorConfig, Emitter};
    ///
    /// assert!(!Emitter::with_terminal(ColorConfig::Auto, false).uses_color());
    /// assert!(Emitter::with_terminal(ColorConfig::Always, false).uses_color());
    /// ```
    pub fn with_terminal(config: ColorConfig, is_tty: bool) -> Self {
        Self {
            color: config.use_color(is_tty),
        }
    }

    /// Whether the rendered text contains ANSI escapes
    #[inline]
    pub fn uses_color(&self) -> bool {
        self.color
    }

    /// Render the four-line report for `diagnostic`.
    ///
    /// Fails if the diagnostic span does not lie inside `source`.
    pub fn render(
        &self,
        path: &str,
        source: &[u8],
        diagnostic: &Diagnostic,
    ) -> DiagnosticResult<String> {
        let snippet = SourceSnippet::from_span(source, diagnostic.span)?;
        let mut result = String::new();

        result.push_str(&format!(
            "{}:{}:{}:\n",
            path,
            snippet.line_number,
            snippet.column()
        ));
        result.push_str(&self.message_line(diagnostic));
        result.push('\n');

        result.push_str(&String::from_utf8_lossy(snippet.line));
        result.push('\n');

        result.push_str(&snippet.caret_padding());
        let carets = "^".repeat(snippet.underline_len);
        if self.color {
            result.push_str(&format!(
                "\x1b[{}m{}{}",
                diagnostic.level.color_code(),
                carets,
                RESET
            ));
        } else {
            result.push_str(&carets);
        }
        result.push('\n');

        Ok(result)
    }

    /// Write the report for `diagnostic` to `out`.
    ///
    /// When the span cannot be located in `source` only the header and the
    /// message are written.
    pub fn emit<W: Write>(
        &self,
        out: &mut W,
        path: &str,
        source: &[u8],
        diagnostic: &Diagnostic,
    ) -> io::Result<()> {
        match self.render(path, source, diagnostic) {
            Ok(text) => out.write_all(text.as_bytes()),
            Err(err) => {
                tracing::warn!(%err, "diagnostic span outside source, dropping snippet");
                writeln!(out, "{}:{}:", path, diagnostic.span.line)?;
                writeln!(out, "{}", self.message_line(diagnostic))
            },
        }
    }

    fn message_line(&self, diagnostic: &Diagnostic) -> String {
        let level = diagnostic.level;
        let tag = if self.color {
            format!(
                "\x1b[{};{}m{}:{}",
                level.intensity(),
                level.color_code(),
                level.name(),
                RESET
            )
        } else {
            format!("{}:", level.name())
        };

        match diagnostic.code {
            Some(code) => format!("{} {} [{}]", tag, diagnostic.message, code),
            None => format!("{} {}", tag, diagnostic.message),
        }
    }
}
