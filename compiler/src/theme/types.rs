use crate::color::Rgb;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// One `<element> <hex color>` definition from a theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub name: String,
    pub color: Rgb,
}

impl ThemeEntry {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// File the theme was read from, used for error reporting and rebuild tracking
    pub source: PathBuf,
    /// Entries in file order
    pub entries: Vec<ThemeEntry>,
}

impl Theme {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            entries: Vec::new(),
        }
    }

    /// First color defined for `element`
    pub fn get(&self, element: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|entry| entry.name == element)
            .map(|entry| entry.color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All themes of one compile run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTable {
    themes: Vec<Theme>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, theme: Theme) {
        self.themes.push(theme);
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Theme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Order themes by name so output does not depend on directory listing order
    pub fn sort_by_name(&mut self) {
        self.themes.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

impl From<Vec<Theme>> for ThemeTable {
    fn from(themes: Vec<Theme>) -> Self {
        Self { themes }
    }
}

impl<'a> IntoIterator for &'a ThemeTable {
    type Item = &'a Theme;
    type IntoIter = std::slice::Iter<'a, Theme>;

    fn into_iter(self) -> Self::IntoIter {
        self.themes.iter()
    }
}

/// How a theme file's name becomes the key in the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeNaming {
    /// Use the file name verbatim, extension included
    #[default]
    FileName,
    /// Drop the extension (`dark.theme` becomes `dark`)
    FileStem,
}

impl ThemeNaming {
    pub fn theme_name(self, path: &Path) -> Option<String> {
        let name = match self {
            ThemeNaming::FileName => path.file_name(),
            ThemeNaming::FileStem => path.file_stem(),
        };
        name.map(OsStr::to_string_lossy).map(|n| n.into_owned())
    }
}
