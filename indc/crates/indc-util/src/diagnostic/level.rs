//! Diagnostic severity levels and color configuration.
//!
//! # Examples
//!
//! ```
//! use indc_util::diagnostic::{ColorConfig, Level};
//!
//! assert!(Level::Error.is_error());
//! assert!(!ColorConfig::Never.use_color(true));
//! ```

use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that stops processing of the unit
    Error,
    /// A warning that doesn't stop processing
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns the display name of the level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }

    /// Returns the ANSI color code for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use indc_util::diagnostic::Level;
    ///
    /// // Error is red (31), Warning is yellow (33)
    /// assert_eq!(Level::Error.color_code(), "31");
    /// assert_eq!(Level::Warning.color_code(), "33");
    /// ```
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
            Level::Note => "36",    // Cyan
        }
    }

    /// Returns the intensity modifier for terminal output
    ///
    /// Errors are displayed in bold.
    #[inline]
    pub const fn intensity(&self) -> &'static str {
        match self {
            Level::Error => "1",
            _ => "0",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Color configuration for diagnostic rendering
///
/// Passed to the [`Emitter`](super::Emitter) rather than read from any
/// process-wide setting, so two emitters in one process can disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Color only when the output is a terminal
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    ///
    /// # Examples
    ///
    /// ```
    /// use indc_util::diagnostic::ColorConfig;
    ///
    /// assert!(ColorConfig::Always.use_color(false));
    /// assert!(ColorConfig::Auto.use_color(true));
    /// assert!(!ColorConfig::Auto.use_color(false));
    /// assert!(!ColorConfig::Never.use_color(true));
    /// ```
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}
