//! # Theme Files
//!
//! Reading human-edited theme definitions from disk.
//!
//! A theme file is plain text. Every line that is not blank and does not
//! start with `#` names a UI element and gives it a hex color:
//!
//! ```text
//! # editor surface
//! background 2c213b
//! foreground c7c7c7
//!
//! keyword    fff
//! ```
//!
//! The file name is the theme name (see [`ThemeNaming`]), so a directory
//! like the following yields the themes `default` and `solarized`:
//!
//! ```text
//! res/themes/
//! ├── default
//! └── solarized
//! ```
//!
//! Colors are decoded by [`crate::color::hex_to_rgb`]; note that three
//! digit colors are NOT expanded CSS-style.

pub mod loader;
pub mod types;

pub use loader::ThemeLoader;
pub use types::{Theme, ThemeEntry, ThemeNaming, ThemeTable};
