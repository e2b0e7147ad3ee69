//! Calendar validity checks for dates embedded in identifier numbers.

use chrono::NaiveDate;

/// Whether year/month/day name a real calendar date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Whether a compact `YYMMDD` string names a real date.
///
/// Two-digit years pivot at 20: `00`–`19` map to the 2000s, `20`–`99` to
/// the 1900s.
pub fn is_valid_date_yymmdd(value: &str) -> bool {
    let Some([yy, mm, dd]) = compact_parts(value) else {
        return false;
    };
    is_valid_date(pivot_year(yy), mm, dd)
}

/// Whether a compact `DDMMYY` string names a real date, with the same
/// two-digit-year pivot as [`is_valid_date_yymmdd`].
pub fn is_valid_date_ddmmyy(value: &str) -> bool {
    let Some([dd, mm, yy]) = compact_parts(value) else {
        return false;
    };
    is_valid_date(pivot_year(yy), mm, dd)
}

fn pivot_year(yy: u32) -> i32 {
    if yy < 20 { 2000 + yy as i32 } else { 1900 + yy as i32 }
}

/// Three zero-padded two-digit fields, or nothing.
fn compact_parts(value: &str) -> Option<[u32; 3]> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let field = |i: usize| value[i..i + 2].parse().ok();
    Some([field(0)?, field(2)?, field(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_dates() {
        assert!(is_valid_date(2024, 2, 29));
        assert!(is_valid_date(2006, 1, 1));
        assert!(!is_valid_date(2023, 2, 29));
        assert!(!is_valid_date(2024, 13, 1));
        assert!(!is_valid_date(2024, 0, 1));
        assert!(!is_valid_date(2024, 1, 32));
    }

    #[test]
    fn compact_yymmdd() {
        assert!(is_valid_date_yymmdd("040229")); // 2004-02-29, leap year
        assert!(is_valid_date_yymmdd("991231")); // 1999-12-31
        assert!(!is_valid_date_yymmdd("050229")); // 2005 is no leap year
        assert!(!is_valid_date_yymmdd("991331"));
        assert!(!is_valid_date_yymmdd("99123"));
        assert!(!is_valid_date_yymmdd("99123A"));
    }

    #[test]
    fn compact_ddmmyy() {
        assert!(is_valid_date_ddmmyy("310199")); // 1999-01-31
        assert!(!is_valid_date_ddmmyy("320199"));
        assert!(is_valid_date_ddmmyy("290204")); // 2004-02-29
        assert!(!is_valid_date_ddmmyy("290205"));
    }

    #[test]
    fn pivot() {
        assert!(is_valid_date_yymmdd("190228")); // 2019
        assert!(is_valid_date_yymmdd("200228")); // 1920
        assert!(!is_valid_date_yymmdd("190229")); // 2019 is no leap year
        assert!(is_valid_date_yymmdd("200229")); // 1920 is one
    }
}
