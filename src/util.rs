// Small numeric helpers shared by the generator and the console summary.
use num_format::{Locale, ToFormattedString};

/// Round half away from zero to a fixed number of decimal places.
///
/// Sampled prices and premiums are stored already rounded so that every
/// output format shows the same value.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus `1,234,567.89`-style thousands separators.
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_keeps_requested_decimals() {
        assert_eq!(round_to(181.2349, 2), 181.23);
        assert_eq!(round_to(181.235_01, 2), 181.24);
        assert_eq!(round_to(7.46, 1), 7.5);
        assert_eq!(round_to(12.0, 1), 12.0);
    }

    #[test]
    fn format_number_inserts_separators() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(23.0, 1), "23.0");
        assert_eq!(format_number(4.2, 1), "4.2");
        assert_eq!(format_number(-1500.5, 1), "-1,500.5");
        assert_eq!(format_number(15000.0, 0), "15,000");
    }

    #[test]
    fn format_int_matches_thousands_grouping() {
        assert_eq!(format_int(540000u32), "540,000");
        assert_eq!(format_int(16000u32), "16,000");
        assert_eq!(format_int(95u32), "95");
    }
}
