const PREFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

/// Currency label: `$` plus an SI-suffixed number rounded to a fixed number
/// of significant digits, two below 100 000 and three at or above. Trailing
/// zeros within the significant digits are kept, so 1000 renders as "$1.0k".
pub fn format_money(value: f64) -> String {
    if value.abs() < 100_000.0 {
        format!("${}", si_format(value, 2))
    } else {
        format!("${}", si_format(value, 3))
    }
}

/// Rounds `value` to `digits` significant digits and renders it with the SI
/// magnitude suffix of the rounded result, so 99 999 at two digits becomes
/// "100k", not "100000".
fn si_format(value: f64, digits: u32) -> String {
    if value == 0.0 {
        return format!("{:.*}", digits.saturating_sub(1) as usize, 0.0);
    }
    let exponent = value.abs().log10().floor() as i32;
    let precision = 10f64.powi(exponent - (digits as i32 - 1));
    let rounded = (value / precision).round() * precision;
    // Rounding up can carry into the next power of ten (999 -> 1000).
    let exponent = if rounded.abs() >= 10f64.powi(exponent + 1) {
        exponent + 1
    } else {
        exponent
    };
    let group = exponent.div_euclid(3).clamp(0, PREFIXES.len() as i32 - 1);
    let scaled = rounded / 10f64.powi(3 * group);
    let integer_digits = exponent - 3 * group + 1;
    let decimals = (digits as i32 - integer_digits).max(0) as usize;
    format!("{scaled:.decimals$}{}", PREFIXES[group as usize])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_significant_digits_below_the_threshold() {
        assert_eq!(format_money(57500.0), "$58k");
        assert_eq!(format_money(67500.0), "$68k");
        assert_eq!(format_money(68500.0), "$69k");
        assert_eq!(format_money(90000.0), "$90k");
        assert_eq!(format_money(7500.0), "$7.5k");
        assert_eq!(format_money(950.0), "$950");
        assert_eq!(format_money(953.0), "$950");
    }

    #[test]
    fn three_significant_digits_at_the_threshold() {
        assert_eq!(format_money(100000.0), "$100k");
        assert_eq!(format_money(125000.0), "$125k");
        assert_eq!(format_money(1250000.0), "$1.25M");
        assert_eq!(format_money(1000000.0), "$1.00M");
    }

    #[test]
    fn trailing_zeros_within_the_significant_digits_stay() {
        assert_eq!(format_money(1000.0), "$1.0k");
        assert_eq!(format_money(10000.0), "$10k");
        assert_eq!(format_money(100000000.0), "$100M");
    }

    #[test]
    fn rounding_can_carry_into_the_next_magnitude() {
        assert_eq!(format_money(99999.0), "$100k");
        assert_eq!(format_money(999.0), "$1.0k");
    }

    #[test]
    fn zero_and_negative_values() {
        assert_eq!(format_money(0.0), "$0.0");
        assert_eq!(format_money(-500.0), "$-500");
        assert_eq!(format_money(-57500.0), "$-58k");
    }
}
