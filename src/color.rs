//! Token colors.
//!
//! A token color is configured as a hex string (`#1E90FF` by default) and
//! downsampled when the terminal only has a 256 or 16 color palette.
//!
//! ```
//! use mention_input::Rgba;
//!
//! let token = Rgba::from_hex("#1E90FF").unwrap();
//! assert_eq!(token, Rgba::DODGER_BLUE);
//! assert_eq!(token.to_string(), "#1E90FF");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// RGBA color with f32 components in range [0.0, 1.0].
///
/// Terminal output picks true color, 256-color or 16-color per
/// [`ColorMode`](crate::ColorMode).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Levels of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The basic 16 ANSI colors, in SGR index order.
#[rustfmt::skip]
const ANSI_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),       (128, 0, 0),     (0, 128, 0),     (128, 128, 0),
    (0, 0, 128),     (128, 0, 128),   (0, 128, 128),   (192, 192, 192),
    (128, 128, 128), (255, 0, 0),     (0, 255, 0),     (255, 255, 0),
    (0, 0, 255),     (255, 0, 255),   (0, 255, 255),   (255, 255, 255),
];

impl Rgba {
    /// `#1E90FF`, the default mention color.
    pub const DODGER_BLUE: Self = Self {
        r: 30.0 / 255.0,
        g: 144.0 / 255.0,
        b: 255.0 / 255.0,
        a: 1.0,
    };

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, u8::MAX)
    }

    /// Color from 8-bit channels including alpha.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |v: u8| f32::from(v) / 255.0;
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }

        let pair = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (channel, i) in channels.iter_mut().zip(0..) {
                    *channel = u8::from_str_radix(digits.get(i..=i)?, 16).ok()? * 17;
                }
                let [r, g, b] = channels;
                Some(Self::from_rgb_u8(r, g, b))
            }
            6 => Some(Self::from_rgb_u8(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::from_rgba_u8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// 8-bit RGB channels, rounded and clamped.
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let byte = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        (byte(self.r), byte(self.g), byte(self.b))
    }

    /// Nearest entry of the xterm 256-color palette.
    ///
    /// Near-gray colors map onto the 24-step gray ramp (232..=255), the
    /// rest onto the color cube (16..=231).
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = self.to_rgb_u8();
        let mean = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
        let near_gray = [r, g, b]
            .iter()
            .all(|&c| u16::from(c).abs_diff(mean) < 10);

        if near_gray {
            return 232 + (mean * 24 / 256).min(23) as u8;
        }
        16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
    }

    /// Nearest of the 16 basic ANSI colors (squared RGB distance).
    #[must_use]
    pub fn to_16_color(self) -> u8 {
        let (r, g, b) = self.to_rgb_u8();
        let dist = |&(pr, pg, pb): &(u8, u8, u8)| {
            let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
            d(r, pr) + d(g, pg) + d(b, pb)
        };
        (0u8..)
            .zip(ANSI_16.iter())
            .min_by_key(|&(_, rgb)| dist(rgb))
            .map_or(0, |(i, _)| i)
    }
}

/// Index of the nearest cube level, splitting at the midpoints.
fn cube_index(value: u8) -> u8 {
    let mut index = 0;
    for pair in CUBE_LEVELS.windows(2) {
        let midpoint = (u16::from(pair[0]) + u16::from(pair[1])) / 2;
        if u16::from(value) < midpoint {
            break;
        }
        index += 1;
    }
    index
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb_u8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        if self.a < 1.0 {
            let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}
