//! ANSI rendering of a surface.
//!
//! Plain segments are written verbatim. Token segments are wrapped in
//! their SGR style and a reset. An optional caret marker is written,
//! unstyled, at the selection's anchor index.

use std::io::{self, Write};

use crate::color::Rgba;
use crate::error::Result;
use crate::markup::Segment;
use crate::style::{Style, TextAttributes};
use crate::surface::Surface;
use crate::unicode;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Marker written at the caret position by the demo.
pub const DEFAULT_CARET_MARKER: char = '|';

/// Color output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette.
    Color256,
    /// 16-color (basic ANSI).
    Color16,
    /// No escape sequences at all.
    NoColor,
}

/// Write a u8 as decimal digits without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// Write an SGR foreground color sequence.
fn write_fg(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            w.write_all(b"\x1b[38;2;")?;
            write_u8_decimal(w, r)?;
            w.write_all(b";")?;
            write_u8_decimal(w, g)?;
            w.write_all(b";")?;
            write_u8_decimal(w, b)?;
            w.write_all(b"m")
        }
        ColorMode::Color256 => {
            w.write_all(b"\x1b[38;5;")?;
            write_u8_decimal(w, color.to_256_color())?;
            w.write_all(b"m")
        }
        ColorMode::Color16 => {
            let idx = color.to_16_color();
            // 30-37 normal, 90-97 bright
            let code = if idx < 8 { 30 + idx } else { 82 + idx };
            w.write_all(b"\x1b[")?;
            write_u8_decimal(w, code)?;
            w.write_all(b"m")
        }
        ColorMode::NoColor => Ok(()),
    }
}

/// Write SGR sequence for text attributes.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    const CODES: [(TextAttributes, &str); 2] =
        [(TextAttributes::BOLD, "1"), (TextAttributes::UNDERLINE, "4")];

    let mut first = true;
    for (flag, code) in CODES {
        if !attrs.contains(flag) {
            continue;
        }
        let sep: &[u8] = if first { b"\x1b[" } else { b";" };
        w.write_all(sep)?;
        w.write_all(code.as_bytes())?;
        first = false;
    }
    if first { Ok(()) } else { w.write_all(b"m") }
}

/// Write the SGR sequences that switch to `style`.
pub fn write_style(w: &mut impl Write, style: Style, mode: ColorMode) -> io::Result<()> {
    if mode == ColorMode::NoColor {
        return Ok(());
    }
    write_attributes(w, style.attributes)?;
    match style.fg {
        Some(fg) => write_fg(w, fg, mode),
        None => Ok(()),
    }
}

fn write_run(w: &mut impl Write, text: &str, style: Style, mode: ColorMode) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if style.is_empty() || mode == ColorMode::NoColor {
        return w.write_all(text.as_bytes());
    }
    write_style(w, style, mode)?;
    w.write_all(text.as_bytes())?;
    w.write_all(RESET.as_bytes())
}

/// Write the surface's markup, with `caret_marker` at the caret if given.
///
/// The marker is only written when the surface has a selection. Write
/// failures surface as [`Error::Io`](crate::Error::Io).
pub fn write_surface(
    w: &mut impl Write,
    surface: &Surface,
    mode: ColorMode,
    caret_marker: Option<char>,
) -> Result<()> {
    let mut marker = caret_marker
        .filter(|_| surface.selection().is_some())
        .map(|c| (surface.caret_index(), c));
    let mut buf = [0u8; 4];
    let mut running = 0;

    for segment in surface.markup() {
        let text = segment.text();
        let style = match segment {
            Segment::Plain(_) => Style::NONE,
            Segment::Token(span) => span.style(),
        };
        let len = segment.len_chars();

        match marker {
            Some((anchor, c)) if anchor < running + len => {
                let split = unicode::char_to_byte(text, anchor - running);
                write_run(w, &text[..split], style, mode)?;
                w.write_all(c.encode_utf8(&mut buf).as_bytes())?;
                write_run(w, &text[split..], style, mode)?;
                marker = None;
            }
            _ => write_run(w, text, style, mode)?,
        }
        running += len;
    }

    if let Some((_, c)) = marker {
        w.write_all(c.encode_utf8(&mut buf).as_bytes())?;
    }
    Ok(())
}

/// Render the surface to a string.
#[must_use]
pub fn render_to_string(surface: &Surface, mode: ColorMode, caret_marker: Option<char>) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_surface(&mut out, surface, mode, caret_marker);
    String::from_utf8_lossy(&out).into_owned()
}

/// Display column of the caret (terminal cells before it).
#[must_use]
pub fn caret_column(surface: &Surface) -> usize {
    let text = surface.text();
    let end = unicode::char_to_byte(&text, surface.caret_index());
    unicode::display_width(&text[..end])
}
