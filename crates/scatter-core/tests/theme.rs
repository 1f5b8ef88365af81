// File: crates/scatter-core/tests/theme.rs
// Purpose: Theme presets, lookup and color token parsing.

use scatter_core::theme::{find, presets};
use scatter_core::{legend, palette_color, parse_color, Series, Theme, PALETTE};
use skia_safe::Color;

#[test]
fn parses_css_like_colors() {
    assert_eq!(parse_color("#fff"), Some(Color::from_argb(255, 255, 255, 255)));
    assert_eq!(parse_color("#38bdf8"), Some(Color::from_argb(255, 0x38, 0xbd, 0xf8)));
    assert_eq!(parse_color("#00000080"), Some(Color::from_argb(0x80, 0, 0, 0)));
    assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Color::from_argb(255, 10, 20, 30)));
    assert_eq!(parse_color("rgba(255,255,255,0.5)"), Some(Color::from_argb(128, 255, 255, 255)));
}

#[test]
fn rejects_garbage() {
    for bad in ["", "#12", "#ggg", "rgb(1,2)", "hsl(1,2,3)", "rgba(1,2,3,x)"] {
        assert_eq!(parse_color(bad), None, "{bad:?}");
    }
}

#[test]
fn find_is_case_insensitive_and_defaults_dark() {
    assert_eq!(find("LIGHT").name, "light");
    assert_eq!(find("solarized").name, "dark");
    assert_eq!(presets().len(), 2);
    assert_eq!(Theme::dark().toggled(), Theme::light());
    assert_eq!(Theme::light().toggled(), Theme::dark());
}

#[test]
fn tokens_override_dark_defaults() {
    let t = Theme::from_tokens("page", Some("#112233"), None);
    assert_eq!(t.border, Color::from_argb(255, 0x11, 0x22, 0x33));
    assert_eq!(t.muted, Theme::dark().muted);
    let fallback = Theme::from_tokens("page", Some("not-a-color"), Some("also bad"));
    assert_eq!(fallback.border, Theme::dark().border);
}

#[test]
fn palette_cycles_and_legend_follows_series_order() {
    assert_eq!(palette_color(0), PALETTE[0]);
    assert_eq!(palette_color(PALETTE.len() + 1), PALETTE[1]);
    let s = vec![
        Series::from_pairs("H_e", &[(0.0, 1.0)], palette_color(3)),
        Series::from_pairs("H_c", &[(0.0, 2.0)], palette_color(4)),
    ];
    let l = legend(&s);
    assert_eq!(l.len(), 2);
    assert_eq!((l[0].name.as_str(), l[0].color.as_str()), ("H_e", "#34d399"));
    assert_eq!(l[1].color, "#fb7185");
}
