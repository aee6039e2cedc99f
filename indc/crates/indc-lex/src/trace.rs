//! Token trace output.
//!
//! The text format prints one line per token: the kind name right-aligned
//! in a 12-column field, the start and end offsets, and the payload text.
//!
//! ```text
//!           fn 0 2 fn
//!   identifier 3 7 main
//!            ( 8 9
//! ```
//!
//! The JSON format prints one object per line with the same fields plus
//! the line number.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use indc_util::StringTable;
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenKind};

/// Width of the right-aligned kind column.
pub const KIND_WIDTH: usize = 12;

/// Output format of a token trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    /// Aligned text, one token per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl TraceFormat {
    /// Name accepted on the command line and in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            TraceFormat::Text => "text",
            TraceFormat::Json => "json",
        }
    }
}

impl fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TraceFormat::Text),
            "json" => Ok(TraceFormat::Json),
            other => Err(format!("unknown trace format '{other}' (expected text or json)")),
        }
    }
}

/// One token as it appears in a JSON trace.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub text: Option<Cow<'a, str>>,
}

impl<'a> TokenRecord<'a> {
    /// Resolve a token's payload against the table it was interned into.
    pub fn new(token: &Token, strings: &'a StringTable) -> Self {
        Self {
            kind: token.kind,
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            text: payload(token, strings),
        }
    }
}

fn payload<'a>(token: &Token, strings: &'a StringTable) -> Option<Cow<'a, str>> {
    token
        .symbol
        .and_then(|symbol| strings.resolve_lossy(symbol).ok())
}

/// Format one token as a text trace line, without the newline.
///
/// ```
/// use indc_lex::{format_token, tokenize};
/// use indc_util::StringTable;
///
/// let mut strings = StringTable::new();
/// let tokens = tokenize(b"main", &mut strings).unwrap();
/// assert_eq!(format_token(&tokens[0], &strings), "  identifier 0 4 main");
/// ```
pub fn format_token(token: &Token, strings: &StringTable) -> String {
    let text = payload(token, strings).unwrap_or_default();
    format!(
        "{:>width$} {} {} {}",
        token.kind.name(),
        token.span.start,
        token.span.end,
        text,
        width = KIND_WIDTH
    )
}

/// Writes tokens to an output stream as they are produced.
pub struct TraceWriter<W: Write> {
    out: W,
    format: TraceFormat,
}

impl<W: Write> TraceWriter<W> {
    /// Create a writer for the given format
    pub fn new(out: W, format: TraceFormat) -> Self {
        Self { out, format }
    }

    /// Write one token.
    pub fn write_token(&mut self, token: &Token, strings: &StringTable) -> io::Result<()> {
        match self.format {
            TraceFormat::Text => writeln!(self.out, "{}", format_token(token, strings)),
            TraceFormat::Json => {
                serde_json::to_writer(&mut self.out, &TokenRecord::new(token, strings))?;
                self.out.write_all(b"\n")
            },
        }
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
