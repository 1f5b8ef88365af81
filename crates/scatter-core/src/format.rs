// File: crates/scatter-core/src/format.rs
// Summary: Compact number formatting for tick labels, tooltips and tables.

/// Shown for missing or non-finite values.
pub const PLACEHOLDER: &str = "\u{2013}";

/// Format `v` for display.
///
/// - non-finite: `–`
/// - `0 < |v| < 0.001` or `|v| >= 10000`: scientific, 2 fractional digits (`1.23e+4`)
/// - `|v| >= 100`: 1 fractional digit
/// - `|v| >= 10`: 2 fractional digits
/// - otherwise: 3 fractional digits
///
/// Exact halfway values round away from zero and `-0.0` prints as `0.000`.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let v = if v == 0.0 { 0.0 } else { v };
    let av = v.abs();
    if av != 0.0 && (av < 0.001 || av >= 10_000.0) {
        return exponential(v, 2);
    }
    let digits = if av >= 100.0 {
        1
    } else if av >= 10.0 {
        2
    } else {
        3
    };
    fixed(v, digits)
}

/// Same as [`fmt`] but accepts a missing value.
pub fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn sign(v: f64) -> &'static str {
    if v < 0.0 { "-" } else { "" }
}

/// `m / 10^digits` written with exactly `digits` fractional digits.
fn scaled_int(m: u64, digits: usize) -> String {
    let p = 10u64.pow(digits as u32);
    if digits == 0 { m.to_string() } else { format!("{}.{:0digits$}", m / p, m % p) }
}

fn fixed(v: f64, digits: usize) -> String {
    match round_tie_up(v.abs(), digits as i32) {
        Some(m) => format!("{}{}", sign(v), scaled_int(m, digits)),
        None => format!("{v:.digits$}"),
    }
}

/// Scientific notation with an explicitly signed exponent.
fn exponential(v: f64, digits: usize) -> String {
    let av = v.abs();
    let exp = format!("{av:e}").split_once('e').and_then(|(_, e)| e.parse::<i32>().ok());
    if let Some(exp) = exp {
        if let Some(mut m) = round_tie_up(av, digits as i32 - exp) {
            let mut exp = exp;
            if m == 10u64.pow(digits as u32 + 1) {
                m /= 10;
                exp += 1;
            }
            let exp = if exp < 0 { exp.to_string() } else { format!("+{exp}") };
            return format!("{}{}e{exp}", sign(v), scaled_int(m, digits));
        }
    }
    let raw = format!("{v:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{mantissa}e{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}e+{exp}"),
        None => raw,
    }
}

/// When `av * 10^pow` is exactly `n + 0.5`, returns `n + 1`.
///
/// Exactness is checked with a fused multiply-add residual, so values that
/// only look like ties after a rounded multiply are left to `format!`.
fn round_tie_up(av: f64, pow: i32) -> Option<u64> {
    if pow.unsigned_abs() > 22 {
        return None;
    }
    let p = 10f64.powi(pow.abs());
    let (scaled, residual) = if pow >= 0 {
        let s = av * p;
        (s, av.mul_add(p, -s))
    } else {
        let s = av / p;
        (s, s.mul_add(p, -av))
    };
    if residual != 0.0 || scaled.fract() != 0.5 || scaled >= 2f64.powi(52) {
        return None;
    }
    Some(scaled.floor() as u64 + 1)
}
