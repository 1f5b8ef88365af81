// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark color tokens for chart chrome, plus CSS-like color parsing.

use skia_safe as skia;

/// Color tokens the renderer reads. Passed to every draw explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Grid lines.
    pub border: skia::Color,
    /// Tick labels and axis titles.
    pub muted: skia::Color,
    /// Axis border and hover guide.
    pub accent: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 11, 15, 20),
            border: skia::Color::from_argb(20, 255, 255, 255),
            muted: skia::Color::from_argb(184, 229, 231, 235),
            accent: skia::Color::from_argb(89, 245, 158, 11),
            tooltip_background: skia::Color::from_argb(235, 17, 24, 39),
            tooltip_text: skia::Color::from_argb(255, 229, 231, 235),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            border: skia::Color::from_argb(26, 0, 0, 0),
            muted: skia::Color::from_argb(166, 17, 24, 39),
            accent: skia::Color::from_argb(89, 245, 158, 11),
            tooltip_background: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_text: skia::Color::from_argb(255, 17, 24, 39),
        }
    }

    /// Build a theme from the page's `border` / `muted` tokens. Missing or
    /// unparsable tokens keep the dark defaults.
    pub fn from_tokens(name: &'static str, border: Option<&str>, muted: Option<&str>) -> Self {
        let base = Theme::dark();
        Self {
            name,
            border: border.and_then(parse_color).unwrap_or(base.border),
            muted: muted.and_then(parse_color).unwrap_or(base.muted),
            ..base
        }
    }

    /// The other preset; used by theme toggles.
    pub fn toggled(&self) -> Self {
        if self.name.eq_ignore_ascii_case("light") { Theme::dark() } else { Theme::light() }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::dark)
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)` or `rgba(r,g,b,a)`
/// (alpha in 0..1).
pub fn parse_color(s: &str) -> Option<skia::Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    let (body, has_alpha) = if let Some(b) = lower.strip_prefix("rgba(") {
        (b, true)
    } else if let Some(b) = lower.strip_prefix("rgb(") {
        (b, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = body.strip_suffix(')')?.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return None;
    }
    let channel = |p: &str| -> Option<u8> {
        let v: f32 = p.parse().ok()?;
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let a = if has_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !a.is_finite() { return None; }
        (a.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        255
    };
    Some(skia::Color::from_argb(a, r, g, b))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(skia::Color::from_argb(255, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
