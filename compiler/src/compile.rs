use crate::codegen;
use crate::config::CompilerConfig;
use crate::error::{CompileError, CompileResult};
use crate::theme::{ThemeLoader, ThemeTable};
use std::{fs, path::Path};

/// Turns a directory of theme files into the generated `THEMES` table.
pub struct ThemeCompiler {
    config: CompilerConfig,
    loader: ThemeLoader,
}

impl ThemeCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        let loader = ThemeLoader::new(config.theme_naming(), config.sort_themes());
        Self { config, loader }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn load(&self, input_dir: impl AsRef<Path>) -> CompileResult<ThemeTable> {
        self.loader.load_all(input_dir.as_ref())
    }

    pub fn compile_to_string(&self, input_dir: impl AsRef<Path>) -> CompileResult<String> {
        let themes = self.load(input_dir)?;
        Ok(codegen::render(&themes))
    }

    /// Compile `input_dir` and overwrite `output_path` with the result.
    ///
    /// The output is rendered completely before the file is touched, so
    /// on error an existing output file is left as it was.
    pub fn compile(
        &self,
        input_dir: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> CompileResult<()> {
        let themes = self.load(input_dir)?;
        self.write_table(&themes, output_path)
    }

    /// Render an already loaded table and overwrite `output_path` with it
    pub fn write_table(
        &self,
        themes: &ThemeTable,
        output_path: impl AsRef<Path>,
    ) -> CompileResult<()> {
        let output_path = output_path.as_ref();
        let source = codegen::render(themes);

        fs::write(output_path, &source).map_err(|e| CompileError::io(output_path, e))?;

        log::info!(
            "Wrote {} bytes of theme code to {}",
            source.len(),
            output_path.display()
        );
        Ok(())
    }

    /// Compile using the configured input directory and output path
    pub fn run(&self) -> CompileResult<()> {
        self.compile(self.config.input_dir(), self.config.output_path())
    }
}

impl Default for ThemeCompiler {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use tempfile::TempDir;

    #[test]
    fn test_run_uses_configured_paths() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("themes");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("default"), "background 2c213b\n").unwrap();
        let output = dir.path().join("themes.rs");

        let compiler = ThemeCompiler::new(
            CompilerConfig::default()
                .with_input_dir(&input)
                .with_output_path(&output),
        );
        assert_ok!(compiler.run());

        let generated = fs::read_to_string(&output).unwrap();
        assert!(generated.contains("\t\t\"background\" => color_u8!(44, 33, 59, 255),\n"));
    }

    #[test]
    fn test_unwritable_output_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("default"), "text fff\n").unwrap();
        let output = dir.path().join("no-such-dir").join("themes.rs");

        assert_err!(ThemeCompiler::default().compile(dir.path(), &output));
        assert!(!output.exists());
    }
}
