//! # Theme Compiler
//!
//! Build-time compiler for editor color themes. It reads a directory of
//! human-edited theme files and generates a Rust source file holding every
//! theme as a static `phf` map, so the application never parses theme files
//! at runtime.
//!
//! ## Modules
//!
//! - [`theme`] - Theme file discovery and parsing
//! - [`color`] - Hex color decoding
//! - [`codegen`] - Rendering the generated `THEMES` table
//! - [`compile`] - The end-to-end [`ThemeCompiler`]
//! - [`build`] - Helpers for running the compiler from `build.rs`
//! - [`config`] - Layered configuration (file, environment, CLI)
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//!
//! ## Usage
//!
//! ```no_run
//! use compiler::ThemeCompiler;
//!
//! ThemeCompiler::default().compile("res/themes", "src/themes.rs")?;
//! # Ok::<(), compiler::CompileError>(())
//! ```

pub mod build;
pub mod codegen;
pub mod color;
pub mod compile;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;

pub use color::{Rgb, hex_to_rgb};
pub use compile::ThemeCompiler;
pub use config::CompilerConfig;
pub use error::{CompileError, CompileResult};
