//! Per-run driver state.
//!
//! A [`Session`] lexes files one after another. Each file gets a fresh
//! string table; the emitter and the diagnostic handler live for the
//! whole run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indc_lex::{Lexer, TraceWriter};
use indc_util::{Emitter, Handler, StringTable};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DriverError, Result};

/// Driver state for one invocation.
pub struct Session {
    /// Effective configuration.
    pub config: Config,

    /// Diagnostic renderer.
    pub emitter: Emitter,

    /// Every diagnostic emitted during the run.
    pub handler: Handler,

    /// Files that could not be read.
    io_failures: usize,
}

impl Session {
    /// Create a session whose emitter colors according to `config`.
    pub fn new(config: Config) -> Self {
        let emitter = Emitter::new(config.color.into());
        Self::with_emitter(config, emitter)
    }

    /// Create a session with an explicit emitter.
    pub fn with_emitter(config: Config, emitter: Emitter) -> Self {
        Self {
            config,
            emitter,
            handler: Handler::new(),
            io_failures: 0,
        }
    }

    /// Lex every file in order, writing traces to `out` and reports to `err`.
    ///
    /// Stops at the first failure unless `keep_going` is set. Returns true
    /// when every file lexed. Only failures to write output are errors.
    pub fn run<O: Write, E: Write>(
        &mut self,
        files: &[PathBuf],
        out: &mut O,
        err: &mut E,
    ) -> Result<bool> {
        for path in files {
            match self.lex_file(path, out, err) {
                Ok(()) => {},
                Err(DriverError::Output(source)) => return Err(DriverError::Output(source)),
                Err(failure) => {
                    if !failure.is_reported() {
                        writeln!(err, "{failure}")?;
                    }
                    if !self.config.keep_going {
                        break;
                    }
                },
            }
        }
        out.flush()?;
        Ok(self.succeeded())
    }

    /// Lex one file and write its trace.
    ///
    /// A lexical failure is rendered to `err` before it is returned.
    pub fn lex_file<O: Write, E: Write>(
        &mut self,
        path: &Path,
        out: &mut O,
        err: &mut E,
    ) -> Result<()> {
        let source = fs::read(path).map_err(|source| {
            self.io_failures += 1;
            DriverError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read source");

        let mut strings = StringTable::new();
        let mut lexer = Lexer::new(&source, &mut strings);
        let mut trace = TraceWriter::new(&mut *out, self.config.format);

        loop {
            match lexer.advance() {
                Ok(token) => {
                    trace.write_token(&token, lexer.strings())?;
                    if token.is_eof() {
                        break;
                    }
                },
                Err(lex_error) => {
                    trace.flush()?;
                    let diagnostic = lex_error.to_diagnostic();
                    let name = path.display().to_string();
                    self.emitter.emit(err, &name, &source, &diagnostic)?;
                    self.handler.emit_diagnostic(diagnostic);
                    return Err(DriverError::Lex {
                        path: path.to_path_buf(),
                        source: lex_error,
                    });
                },
            }
        }
        trace.flush()?;

        info!(path = %path.display(), stats = %strings.stats(), "lexed");
        Ok(())
    }

    /// Returns true if no file failed so far.
    pub fn succeeded(&self) -> bool {
        self.io_failures == 0 && !self.handler.has_errors()
    }

    /// Number of files that failed so far.
    pub fn failure_count(&self) -> usize {
        self.io_failures + self.handler.error_count()
    }
}
