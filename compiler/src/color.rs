use std::fmt;
use thiserror::Error;

/// Errors produced by [`hex_to_rgb`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    #[error("Invalid hex color '{hex}': expected 3 or 6 digits, found {len}")]
    InvalidLength { hex: String, len: usize },
    #[error("Invalid hex color '{hex}': non-hexadecimal character")]
    InvalidDigit { hex: String },
}

/// An opaque 8-bit RGB color. Alpha is always emitted as 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Renders the color as the constructor call used in generated code.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color_u8!({}, {}, {}, 255)", self.r, self.g, self.b)
    }
}

/// Decode a theme file color into its red, green and blue channels.
///
/// Six digit strings consume two hex digits per channel (`"202020"` is
/// `(32, 32, 32)`). Three digit strings consume ONE digit per channel and
/// the digit is not repeated: `"1ab"` is `(0x1, 0xa, 0xb)`, not the CSS
/// short-hand `(0x11, 0xaa, 0xbb)`. Existing theme files rely on this, so
/// `"fff"` stays `(15, 15, 15)`.
///
/// No `#` prefix is accepted and no alpha channel is parsed.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, HexColorError> {
    let width = match hex.len() {
        6 => 2,
        3 => 1,
        len => {
            return Err(HexColorError::InvalidLength {
                hex: hex.to_string(),
                len,
            });
        }
    };

    // from_str_radix alone would accept a leading '+'
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexColorError::InvalidDigit {
            hex: hex.to_string(),
        });
    }

    let channel = |index: usize| {
        let start = index * width;
        u8::from_str_radix(&hex[start..start + width], 16).map_err(|_| {
            HexColorError::InvalidDigit {
                hex: hex.to_string(),
            }
        })
    };

    Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
}
