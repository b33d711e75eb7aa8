//! Color validation, hue-wheel geometry and HSL conversion.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::WHEEL_LIGHTNESS;
use crate::models::{HexColor, Hsl};

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("hex pattern is valid")
});

/// Check whether `text` is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(text: &str) -> bool {
    HEX_PATTERN.is_match(text)
}

/// Convert HSL to a lowercase `#rrggbb` color.
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let h = hsl.hue;
    let s = hsl.saturation / 100.0;
    let l = hsl.lightness / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * c).round().clamp(0.0, 255.0) as u8
    };

    HexColor::from_rgb(channel(0.0), channel(8.0), channel(4.0))
}

/// Map a click inside the hue wheel to a color.
///
/// `x`/`y` are relative to the wheel's top-left corner. Hue is the angle from
/// the center measured from the positive x-axis (screen coordinates, so it
/// grows clockwise); saturation is the distance from the center relative to
/// the radius, capped at 100%.
pub fn wheel_pick(x: f64, y: f64, width: f64, height: f64) -> Hsl {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let dx = x - cx;
    let dy = y - cy;
    let radius = cx.min(cy);

    let mut hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    if hue >= 360.0 {
        hue -= 360.0;
    }
    let saturation = if radius > 0.0 {
        (dx.hypot(dy) / radius).min(1.0) * 100.0
    } else {
        0.0
    };

    Hsl {
        hue,
        saturation,
        lightness: WHEEL_LIGHTNESS,
    }
}

/// Editable mirror of the committed color for the hex text field.
///
/// The buffer may hold anything the user types; only text passing
/// [`is_valid_hex`] is handed back for commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexDraft {
    buffer: String,
}

impl HexDraft {
    pub fn new(committed: &HexColor) -> Self {
        Self {
            buffer: committed.to_string(),
        }
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Stage typed text, returning the color to commit if it is valid.
    pub fn input(&mut self, text: impl Into<String>) -> Option<HexColor> {
        self.buffer = text.into();
        HexColor::parse(&self.buffer).ok()
    }

    /// Focus left the field: an invalid buffer reverts to the committed color.
    pub fn blur(&mut self, committed: &HexColor) {
        if !is_valid_hex(&self.buffer) {
            self.buffer = committed.to_string();
        }
    }

    /// The committed color changed through another control.
    pub fn sync(&mut self, committed: &HexColor) {
        if self.buffer != committed.as_str() {
            self.buffer = committed.to_string();
        }
    }
}
