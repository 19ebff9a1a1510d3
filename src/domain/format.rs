//! Display formatting for the two value units.

use super::entities::DisplayMode;

/// Fixed conversion between the FV and HV units.
pub const HV_DIVISOR: f64 = 40.0;

/// Read-time view of a stored FV value in the requested unit.
pub fn apply_mode_scale(value: f64, mode: DisplayMode) -> f64 {
    match mode {
        DisplayMode::Fv => value,
        DisplayMode::Hv => value / HV_DIVISOR,
    }
}

/// Formats an already-scaled value for display.
pub fn format_value(value: f64, mode: DisplayMode) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    match mode {
        DisplayMode::Hv => format_hv(value),
        DisplayMode::Fv => format_fv(value),
    }
}

/// Up to three decimals with trailing zeros removed.
fn format_hv(value: f64) -> String {
    let fixed = format!("{:.3}", round_half_up(value, 1000.0));
    let trimmed = strip_trailing_zeros(&fixed);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_fv(value: f64) -> String {
    if value < 5.0 && value.fract() != 0.0 {
        return format!("{:.1}", round_half_up(value, 10.0));
    }
    group_thousands(value.round() as i64)
}

/// `{:.N}` breaks exact ties towards the even digit; display wants them up.
fn round_half_up(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

fn strip_trailing_zeros(fixed: &str) -> &str {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.')
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hv_strips_trailing_zeros() {
        assert_eq!(format_value(2.5, DisplayMode::Hv), "2.5");
        assert_eq!(format_value(3.0, DisplayMode::Hv), "3");
        assert_eq!(format_value(100.0, DisplayMode::Hv), "100");
        assert_eq!(format_value(10.05, DisplayMode::Hv), "10.05");
        assert_eq!(format_value(0.0, DisplayMode::Hv), "0");
        assert_eq!(format_value(1.23456, DisplayMode::Hv), "1.235");
    }

    #[test]
    fn fv_keeps_one_decimal_below_five() {
        assert_eq!(format_value(3.5, DisplayMode::Fv), "3.5");
        assert_eq!(format_value(0.8, DisplayMode::Fv), "0.8");
        assert_eq!(format_value(3.0, DisplayMode::Fv), "3");
        assert_eq!(format_value(7.6, DisplayMode::Fv), "8");
    }

    #[test]
    fn fv_groups_thousands() {
        assert_eq!(format_value(999.0, DisplayMode::Fv), "999");
        assert_eq!(format_value(1_000.0, DisplayMode::Fv), "1,000");
        assert_eq!(format_value(1_234_567.4, DisplayMode::Fv), "1,234,567");
        assert_eq!(format_value(-12_500.0, DisplayMode::Fv), "-12,500");
    }

    #[test]
    fn stored_values_render_in_both_units() {
        assert_eq!(format_value(apply_mode_scale(120.0, DisplayMode::Fv), DisplayMode::Fv), "120");
        assert_eq!(format_value(apply_mode_scale(120.0, DisplayMode::Hv), DisplayMode::Hv), "3");
        assert_eq!(format_value(apply_mode_scale(3.0, DisplayMode::Fv), DisplayMode::Fv), "3");
        assert_eq!(format_value(apply_mode_scale(3.0, DisplayMode::Hv), DisplayMode::Hv), "0.075");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_value(apply_mode_scale(2.5, DisplayMode::Hv), DisplayMode::Hv), "0.063");
        assert_eq!(format_value(apply_mode_scale(22.5, DisplayMode::Hv), DisplayMode::Hv), "0.563");
        assert_eq!(format_value(2.25, DisplayMode::Fv), "2.3");
    }

    #[test]
    fn non_finite_values_render_as_zero() {
        assert_eq!(format_value(f64::NAN, DisplayMode::Fv), "0");
        assert_eq!(format_value(f64::INFINITY, DisplayMode::Hv), "0");
    }
}
