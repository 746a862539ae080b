//! Rendering a [`ThemeTable`] as Rust source.
//!
//! The output is a single `phf` map constant whose values are `macroquad`
//! colors built with `color_u8!`:
//!
//! ```text
//! use phf::{Map, phf_map};
//! use macroquad::{color::Color, color_u8};
//!
//! pub const THEMES: Map<&'static str, Map<&'static str, Color>> = phf_map! {
//!     "dark" => phf_map! {
//!         "background" => color_u8!(32, 32, 32, 255),
//!     },
//! };
//! ```

use crate::theme::ThemeTable;

pub const PREAMBLE: &str = "use phf::{Map, phf_map};\nuse macroquad::{color::Color, color_u8};\n\n";

pub const TABLE_DECLARATION: &str =
    "pub const THEMES: Map<&'static str, Map<&'static str, Color>> = phf_map! {\n";

/// Render every theme in table order, entries in file order.
pub fn render(themes: &ThemeTable) -> String {
    let mut result = String::from(PREAMBLE);
    result.push_str(TABLE_DECLARATION);

    for theme in themes {
        result.push_str(&format!("\t{} => phf_map! {{\n", string_literal(&theme.name)));

        for entry in &theme.entries {
            result.push_str(&format!(
                "\t\t{} => {},\n",
                string_literal(&entry.name),
                entry.color
            ));
        }

        result.push_str("\t},\n");
    }

    result.push_str("};\n");
    result
}

// Debug formatting of str produces a valid, escaped Rust string literal
fn string_literal(value: &str) -> String {
    format!("{value:?}")
}
