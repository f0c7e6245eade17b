// ABOUTME: Conversions between hex strings, RGB triples and HSL triples
// ABOUTME: All functions are pure; clamping to 0-255 happens only when emitting hex

use auraform_types::{HslColor, RgbColor};

use crate::error::{ColorError, Result};

/// Parse a hex color string to RGB.
///
/// Accepts `#RGB` and `#RRGGBB`, with or without the leading `#`, in any case.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] carrying the original input when the
/// digits are not exactly 3 or 6 hexadecimal characters.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    let cleaned = hex.strip_prefix('#').unwrap_or(hex);

    let expanded: String = if cleaned.chars().count() == 3 {
        cleaned.chars().flat_map(|c| [c, c]).collect()
    } else {
        cleaned.to_string()
    };

    if expanded.len() != 6 || !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_format(hex));
    }

    // Slicing is safe: all six bytes are ASCII hex digits
    let channel = |start: usize| {
        i32::from_str_radix(&expanded[start..start + 2], 16)
            .map_err(|_| ColorError::invalid_format(hex))
    };

    Ok(RgbColor::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Convert RGB to HSL.
///
/// When two channels tie for the maximum, the first of r, g, b decides the hue branch.
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (sector / 6.0, s)
    };

    HslColor::new(round(h * 360.0), round(s * 100.0), round(l * 100.0))
}

/// Convert HSL to RGB
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if s == 0.0 {
        let value = round(l * 255.0);
        return RgbColor::new(value, value, value);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    RgbColor::new(
        round(hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0),
        round(hue_to_channel(p, q, h) * 255.0),
        round(hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert a hex color to HSL.
///
/// # Errors
///
/// Fails like [`hex_to_rgb`] on malformed input.
pub fn hex_to_hsl(hex: &str) -> Result<HslColor> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Convert HSL to a hex string
pub fn hsl_to_hex(hsl: HslColor) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Convert RGB to a lowercase `#rrggbb` string, clamping each channel to 0-255
pub fn rgb_to_hex(rgb: RgbColor) -> String {
    let [r, g, b] = rgb.channels().map(|c| clamp(c, 0, 255));
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Canonical lowercase six-digit form of any accepted hex input.
///
/// # Errors
///
/// Fails like [`hex_to_rgb`] on malformed input.
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

/// Clamp a value between `min` and `max` inclusive.
///
/// Callers must pass `min <= max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let value = if value < min { min } else { value };
    if value > max { max } else { value }
}

fn round(value: f64) -> i32 {
    // `as` saturates, so non-finite intermediates from out-of-range input cannot panic
    value.round() as i32
}
