//! Build script integration.
//!
//! Instead of committing the generated table, a crate can compile its
//! themes from `build.rs`:
//!
//! ```no_run
//! fn main() {
//!     compiler::build::compile_themes("res/themes").expect("failed to compile themes");
//! }
//! ```
//!
//! and include the result:
//!
//! ```ignore
//! include!(concat!(env!("OUT_DIR"), "/themes.rs"));
//! ```

use crate::compile::ThemeCompiler;
use crate::error::{CompileError, CompileResult};
use crate::theme::ThemeTable;
use std::env;
use std::path::{Path, PathBuf};

pub const GENERATED_FILE_NAME: &str = "themes.rs";

/// Compile `input_dir` into `$OUT_DIR/themes.rs` with default settings.
pub fn compile_themes(input_dir: impl AsRef<Path>) -> CompileResult<PathBuf> {
    let out_dir = env::var_os("OUT_DIR")
        .ok_or_else(|| CompileError::Config("OUT_DIR is not set".to_string()))?;

    compile_into(&ThemeCompiler::default(), input_dir.as_ref(), Path::new(&out_dir))
}

/// Compile into `out_dir` and tell cargo which inputs to watch.
pub fn compile_into(
    compiler: &ThemeCompiler,
    input_dir: &Path,
    out_dir: &Path,
) -> CompileResult<PathBuf> {
    let output_path = out_dir.join(GENERATED_FILE_NAME);
    let themes = compiler.load(input_dir)?;

    for directive in rerun_directives(input_dir, &themes) {
        println!("{directive}");
    }

    compiler.write_table(&themes, &output_path)?;
    Ok(output_path)
}

/// `cargo:rerun-if-changed` lines for the theme directory and every theme file.
///
/// The directory itself catches added and removed theme files.
pub fn rerun_directives(input_dir: &Path, themes: &ThemeTable) -> Vec<String> {
    std::iter::once(input_dir)
        .chain(themes.iter().map(|theme| theme.source.as_path()))
        .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
        .collect()
}
