use crate::color::hex_to_rgb;
use crate::error::{CompileError, CompileResult};
use crate::theme::types::{Theme, ThemeEntry, ThemeNaming, ThemeTable};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Theme loader responsible for reading theme files from the filesystem
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    naming: ThemeNaming,
    sort_themes: bool,
}

impl ThemeLoader {
    pub fn new(naming: ThemeNaming, sort_themes: bool) -> Self {
        Self {
            naming,
            sort_themes,
        }
    }

    /// List the regular files in `dir`, in directory listing order.
    ///
    /// Subdirectories are skipped. Symlinks count as files when they
    /// resolve to one.
    pub fn enumerate(&self, dir: &Path) -> CompileResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| CompileError::io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CompileError::io(dir, e))?;
            let path = entry.path();

            if path.is_file() {
                files.push(path);
            } else {
                log::debug!("Skipping non-file entry {}", path.display());
            }
        }

        Ok(files)
    }

    pub fn parse_file(&self, path: &Path) -> CompileResult<Vec<ThemeEntry>> {
        let content = fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
        self.parse_str(path, &content)
    }

    /// Parse theme file contents. `source` only labels errors.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#`
    /// are ignored. Every other line must hold an element name followed by
    /// a hex color; any further tokens are ignored.
    pub fn parse_str(&self, source: &Path, content: &str) -> CompileResult<Vec<ThemeEntry>> {
        let mut entries = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            let (Some(name), Some(hex)) = (tokens.next(), tokens.next()) else {
                return Err(CompileError::MissingColor {
                    file: source.to_path_buf(),
                    line: line_number,
                    content: trimmed.to_string(),
                });
            };

            let color = hex_to_rgb(hex).map_err(|e| CompileError::InvalidColor {
                file: source.to_path_buf(),
                line: line_number,
                source: e,
            })?;

            if tokens.next().is_some() {
                log::debug!(
                    "{}:{line_number}: ignoring tokens after '{hex}'",
                    source.display()
                );
            }

            entries.push(ThemeEntry::new(name, color));
        }

        Ok(entries)
    }

    pub fn load_theme(&self, path: &Path) -> CompileResult<Theme> {
        let name = self.naming.theme_name(path).ok_or_else(|| {
            CompileError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "theme path has no file name"),
            )
        })?;

        let mut theme = Theme::new(name, path);
        theme.entries = self.parse_file(path)?;

        log::debug!(
            "Loaded theme '{}' with {} entries from {}",
            theme.name,
            theme.len(),
            path.display()
        );
        Ok(theme)
    }

    /// Load every theme file in `dir`, failing on the first broken file
    pub fn load_all(&self, dir: &Path) -> CompileResult<ThemeTable> {
        let mut table = ThemeTable::new();

        for path in self.enumerate(dir)? {
            table.push(self.load_theme(&path)?);
        }

        if self.sort_themes {
            table.sort_by_name();
        }

        log::info!("Loaded {} themes from {}", table.len(), dir.display());
        Ok(table)
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new(ThemeNaming::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HexColorError, Rgb};
    use claims::{assert_matches, assert_ok};
    use tempfile::TempDir;

    fn parse(content: &str) -> CompileResult<Vec<ThemeEntry>> {
        ThemeLoader::default().parse_str(Path::new("test"), content)
    }

    #[test]
    fn test_parse_dark_example() {
        let entries = assert_ok!(parse("background 202020\ntext fff\n# a comment\n"));

        assert_eq!(
            entries,
            vec![
                ThemeEntry::new("background", Rgb::new(0x20, 0x20, 0x20)),
                ThemeEntry::new("text", Rgb::new(0xf, 0xf, 0xf)),
            ]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_anywhere() {
        let content = "# leading\n\nkeyword ff0000\n   \n  # indented comment\n\tstring   00ff00  \r\n\n# trailing";
        let entries = assert_ok!(parse(content));

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["keyword", "string"]);
        assert_eq!(entries[1].color, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_empty_file_has_no_entries() {
        assert_eq!(assert_ok!(parse("")), vec![]);
        assert_eq!(assert_ok!(parse("# only a comment\n\n")), vec![]);
    }

    #[test]
    fn test_single_token_line_fails() {
        let result = parse("text fff\nbackground\n");

        assert_matches!(
            result,
            Err(CompileError::MissingColor { line: 2, ref content, .. }) if content == "background"
        );
    }

    #[test]
    fn test_bad_color_reports_line() {
        let result = parse("text fff\n\nbackground 12345\n");

        assert_matches!(
            result,
            Err(CompileError::InvalidColor {
                line: 3,
                source: HexColorError::InvalidLength { len: 5, .. },
                ..
            })
        );
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let entries = assert_ok!(parse("ident 0f0f0f trailing words"));
        assert_eq!(entries, vec![ThemeEntry::new("ident", Rgb::new(15, 15, 15))]);
    }

    #[test]
    fn test_enumerate_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dark"), "text fff\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = assert_ok!(ThemeLoader::default().enumerate(dir.path()));
        assert_eq!(files, vec![dir.path().join("dark")]);
    }

    #[test]
    fn test_load_all_sorts_and_names_by_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("light.theme"), "text 000\n").unwrap();
        fs::write(dir.path().join("dark.theme"), "text fff\n").unwrap();

        let table = assert_ok!(ThemeLoader::new(ThemeNaming::FileStem, true).load_all(dir.path()));

        let names: Vec<_> = table.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["dark", "light"]);
        assert_eq!(
            table.get("light").and_then(|t| t.get("text")),
            Some(Rgb::new(0, 0, 0))
        );
    }

    #[test]
    fn test_path_without_file_name_is_io_error() {
        assert_matches!(
            ThemeLoader::default().load_theme(Path::new("/")),
            Err(CompileError::Io { ref source, .. }) if source.kind() == io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert_matches!(
            ThemeLoader::default().load_all(&missing),
            Err(CompileError::Io { ref path, .. }) if path == &missing
        );
    }
}
