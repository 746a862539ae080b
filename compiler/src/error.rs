use crate::color::HexColorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling a directory of theme files.
///
/// Every failure is fatal for the run: the compiler never skips a broken
/// line or a broken file, and nothing is written unless the whole theme
/// table rendered successfully.
///
/// # Error Categories
///
/// ## Filesystem Errors
/// - [`Io`] - Listing the theme directory, reading a theme file or writing
///   the generated output failed
///
/// ## Theme File Errors
/// - [`MissingColor`] - A definition line carries an element name but no color
/// - [`InvalidColor`] - The color token is not a valid 3 or 6 digit hex string
///
/// ## Setup Errors
/// - [`Config`] - Configuration could not be loaded or the build environment
///   is incomplete
///
/// # Examples
///
/// ```no_run
/// use compiler::error::CompileError;
/// use compiler::ThemeCompiler;
///
/// match ThemeCompiler::default().compile("res/themes", "src/themes.rs") {
///     Ok(()) => {}
///     Err(CompileError::InvalidColor { file, line, source }) => {
///         eprintln!("{}:{line}: {source}", file.display());
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
///
/// [`Io`]: CompileError::Io
/// [`MissingColor`]: CompileError::MissingColor
/// [`InvalidColor`]: CompileError::InvalidColor
/// [`Config`]: CompileError::Config
#[derive(Debug, Error)]
pub enum CompileError {
    /// A filesystem operation on `path` failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A definition line has fewer than two whitespace separated tokens.
    ///
    /// `line` is 1-based and `content` is the offending line with
    /// surrounding whitespace removed.
    #[error("{}:{line}: expected '<element> <hex color>', found '{content}'", file.display())]
    MissingColor {
        file: PathBuf,
        line: usize,
        content: String,
    },

    /// The second token of a definition line failed to decode.
    #[error("{}:{line}: {source}", file.display())]
    InvalidColor {
        file: PathBuf,
        line: usize,
        #[source]
        source: HexColorError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CompileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for CompileError {
    fn from(error: config::ConfigError) -> Self {
        CompileError::Config(error.to_string())
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
