//! Digit-string → spoken-form Chinese conversion.
//!
//! Three reading modes:
//! - magnitude: grouped place-value words (123 → 一百二十三)
//! - digit-by-digit: each digit independently (2023 → 二零二三)
//! - decimal composite: magnitude integer, 点, digit-by-digit fraction
//!
//! Pure functions — no I/O, no shared state.

use crate::error::VerbalizeError;

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

const ZERO: char = '零';
const NEGATIVE: char = '负';
const POINT: char = '点';
const QIAN: char = '千';
const BAI: char = '百';
const SHI: char = '十';

/// Big-unit suffix for 4-digit group index 1, 2, … (group 0 carries none).
const BIG_UNITS: [char; 2] = ['万', '亿'];

/// Maximum significant digits in a magnitude-read integer — every group
/// the 万/亿 suffix table can name. Longer runs fail instead of
/// overflowing or truncating.
pub const MAX_INTEGER_DIGITS: usize = 12;

/// Map each ASCII digit to its spoken glyph, leaving any other character
/// untouched. Used for calendar years and post-decimal digits, which are
/// read one digit at a time.
pub fn digits_to_hanzi(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Read an integer (optional leading `-`, then ASCII digits) as its
/// spoken magnitude form: 4-digit groups with 万/亿 suffixes, unit words
/// within each group, and 零 markers where zeros would otherwise make the
/// reading ambiguous.
pub fn integer_to_hanzi(s: &str) -> Result<String, VerbalizeError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VerbalizeError::MalformedNumeral(s.to_string()));
    }

    // Leading zeros carry no value in a magnitude reading.
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(ZERO.to_string());
    }
    if digits.len() > MAX_INTEGER_DIGITS {
        return Err(VerbalizeError::MalformedNumeral(s.to_string()));
    }

    let bytes = digits.as_bytes();
    let group_count = bytes.len().div_ceil(4);
    let mut raw = String::new();
    let mut gap = false;

    // Most-significant group first. `gi` counts groups from the
    // least-significant end, so `gi == group_count - 1` is the global
    // leading group.
    for gi in (0..group_count).rev() {
        let end = bytes.len() - gi * 4;
        let start = end.saturating_sub(4);
        let group = &bytes[start..end];

        if group.iter().all(|&b| b == b'0') {
            gap = true;
            continue;
        }
        if gap {
            raw.push(ZERO);
            gap = false;
        }

        // Left-pad the group to 千/百/十/units positions.
        let mut d = [0u8; 4];
        for (i, b) in group.iter().rev().enumerate() {
            d[3 - i] = b - b'0';
        }
        let [qian, bai, shi, ge] = d;
        let leading = gi == group_count - 1;

        if qian > 0 {
            raw.push(DIGITS[qian as usize]);
            raw.push(QIAN);
        } else if !leading {
            raw.push(ZERO);
        }

        if bai > 0 {
            raw.push(DIGITS[bai as usize]);
            raw.push(BAI);
        } else if qian > 0 && (shi > 0 || ge > 0) {
            raw.push(ZERO);
        }

        if shi > 0 {
            // 10–19 read as bare 十 in the global leading group only
            // (12 → 十二); everywhere else the 一 is spoken (110 → 一百一十).
            if !(shi == 1 && qian == 0 && bai == 0 && leading) {
                raw.push(DIGITS[shi as usize]);
            }
            raw.push(SHI);
        } else if bai > 0 && ge > 0 {
            raw.push(ZERO);
        }

        if ge > 0 {
            raw.push(DIGITS[ge as usize]);
        }

        if gi > 0 {
            raw.push(BIG_UNITS[gi - 1]);
        }
    }

    let mut spoken = collapse_zero_runs(&raw);
    if negative {
        spoken.insert(0, NEGATIVE);
    }
    Ok(spoken)
}

/// Read a number with an optional decimal point: magnitude integer part,
/// 点, then the fractional digits one at a time. Without a point this is
/// just [`integer_to_hanzi`].
pub fn number_to_hanzi(s: &str) -> Result<String, VerbalizeError> {
    match s.split_once('.') {
        Some((int_part, frac_part)) => {
            if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VerbalizeError::MalformedNumeral(s.to_string()));
            }
            Ok(format!(
                "{}{}{}",
                integer_to_hanzi(int_part)?,
                POINT,
                digits_to_hanzi(frac_part)
            ))
        }
        None => integer_to_hanzi(s),
    }
}

/// Collapse runs of 零 to a single marker and strip one trailing 零
/// (unless the whole reading is just 零).
fn collapse_zero_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_zero = false;
    for c in s.chars() {
        if c == ZERO {
            if !last_was_zero {
                out.push(c);
            }
            last_was_zero = true;
        } else {
            out.push(c);
            last_was_zero = false;
        }
    }
    if out.chars().count() > 1 && out.ends_with(ZERO) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse lookup: read a spoken magnitude form back into its value.
    /// Only understands the forms this module emits (亿 before 万, each
    /// big unit at most once).
    fn hanzi_value(s: &str) -> u64 {
        let mut total = 0u64;
        let mut section = 0u64;
        let mut current = 0u64;
        for c in s.chars() {
            match c {
                '零' => {}
                '十' => {
                    section += if current == 0 { 10 } else { current * 10 };
                    current = 0;
                }
                '百' => {
                    section += current * 100;
                    current = 0;
                }
                '千' => {
                    section += current * 1000;
                    current = 0;
                }
                '万' => {
                    total += (section + current) * 10_000;
                    section = 0;
                    current = 0;
                }
                '亿' => {
                    total += (section + current) * 100_000_000;
                    section = 0;
                    current = 0;
                }
                _ => {
                    current = DIGITS
                        .iter()
                        .position(|&d| d == c)
                        .unwrap_or_else(|| panic!("unexpected glyph {c} in {s}"))
                        as u64;
                }
            }
        }
        total + section + current
    }

    fn spoken(n: u64) -> String {
        integer_to_hanzi(&n.to_string()).unwrap()
    }

    // ── digit-by-digit ──────────────────────────────────────────────

    #[test]
    fn digits_map_one_to_one() {
        assert_eq!(digits_to_hanzi("2023"), "二零二三");
        assert_eq!(digits_to_hanzi("0"), "零");
        assert_eq!(digits_to_hanzi("0987654321"), "零九八七六五四三二一");
    }

    #[test]
    fn digits_pass_non_digits_through() {
        assert_eq!(digits_to_hanzi("a1b2"), "a一b二");
        assert_eq!(digits_to_hanzi("你好"), "你好");
        assert_eq!(digits_to_hanzi(""), "");
    }

    // ── magnitude reading ───────────────────────────────────────────

    #[test]
    fn single_digits() {
        assert_eq!(spoken(0), "零");
        assert_eq!(spoken(1), "一");
        assert_eq!(spoken(9), "九");
    }

    #[test]
    fn teens_read_bare_ten() {
        assert_eq!(spoken(10), "十");
        assert_eq!(spoken(12), "十二");
        assert_eq!(spoken(19), "十九");
        for n in 10..=19 {
            assert!(spoken(n).starts_with('十'), "{n} must start with 十");
        }
    }

    #[test]
    fn non_leading_tens_keep_the_one() {
        assert_eq!(spoken(110), "一百一十");
        assert_eq!(spoken(112), "一百一十二");
        assert_eq!(spoken(1010), "一千零一十");
        assert_eq!(spoken(210), "二百一十");
    }

    #[test]
    fn hundreds_and_thousands() {
        assert_eq!(spoken(123), "一百二十三");
        assert_eq!(spoken(100), "一百");
        assert_eq!(spoken(999), "九百九十九");
        assert_eq!(spoken(1234), "一千二百三十四");
        assert_eq!(spoken(9999), "九千九百九十九");
    }

    #[test]
    fn internal_zeros_get_one_marker() {
        assert_eq!(spoken(1001), "一千零一");
        assert_eq!(spoken(101), "一百零一");
        assert_eq!(spoken(1005), "一千零五");
        assert_eq!(spoken(10001), "一万零一");
        assert_eq!(spoken(100000001), "一亿零一");
    }

    #[test]
    fn zero_elision_never_doubles() {
        for n in [1001u64, 1010, 10001, 10010, 100001, 100000001, 120000300] {
            let s = spoken(n);
            let zeros = s.chars().filter(|&c| c == '零').count();
            assert_eq!(zeros, 1, "{n} read as {s} must hold exactly one 零");
            assert!(!s.contains("零零"), "{n} read as {s}");
        }
    }

    #[test]
    fn big_units() {
        assert_eq!(spoken(10000), "一万");
        assert_eq!(spoken(100000), "十万");
        assert_eq!(spoken(1000000), "一百万");
        assert_eq!(spoken(100000000), "一亿");
        assert_eq!(spoken(1000000000), "十亿");
        assert_eq!(spoken(120000300), "一亿二千万零三百");
    }

    #[test]
    fn negative_prepends_fu() {
        assert_eq!(integer_to_hanzi("-5").unwrap(), "负五");
        assert_eq!(integer_to_hanzi("-10").unwrap(), "负十");
        assert_eq!(integer_to_hanzi("-10000").unwrap(), "负一万");
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(integer_to_hanzi("007").unwrap(), "七");
        assert_eq!(integer_to_hanzi("000").unwrap(), "零");
        assert_eq!(integer_to_hanzi("0123").unwrap(), "一百二十三");
    }

    #[test]
    fn magnitude_round_trip() {
        for n in 0..=20_000u64 {
            let s = spoken(n);
            assert_eq!(hanzi_value(&s), n, "{n} read as {s}");
        }
        for n in [
            100_001u64,
            100_100,
            101_000,
            110_101,
            999_999,
            1_000_001,
            10_000_000,
            100_000_001,
            120_000_300,
            987_654_321_098,
            999_999_999_999,
        ] {
            let s = spoken(n);
            assert_eq!(hanzi_value(&s), n, "{n} read as {s}");
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(integer_to_hanzi("").is_err());
        assert!(integer_to_hanzi("-").is_err());
        assert!(integer_to_hanzi("--5").is_err());
        assert!(integer_to_hanzi("12a").is_err());
        assert!(integer_to_hanzi("一二三").is_err());
    }

    #[test]
    fn rejects_over_long_runs() {
        let max = "9".repeat(MAX_INTEGER_DIGITS);
        assert!(integer_to_hanzi(&max).is_ok());
        let too_long = "1".repeat(MAX_INTEGER_DIGITS + 1);
        assert_eq!(
            integer_to_hanzi(&too_long),
            Err(VerbalizeError::MalformedNumeral(too_long.clone()))
        );
        // Leading zeros do not count toward the bound.
        let padded = format!("000{max}");
        assert!(integer_to_hanzi(&padded).is_ok());
    }

    // ── decimal composite ───────────────────────────────────────────

    #[test]
    fn decimals_read_fraction_digit_by_digit() {
        assert_eq!(number_to_hanzi("1.23").unwrap(), "一点二三");
        assert_eq!(number_to_hanzi("0.5").unwrap(), "零点五");
        assert_eq!(number_to_hanzi("-3.14").unwrap(), "负三点一四");
        assert_eq!(number_to_hanzi("3.1415926535").unwrap(), "三点一四一五九二六五三五");
    }

    #[test]
    fn plain_integers_delegate_to_magnitude() {
        assert_eq!(number_to_hanzi("123").unwrap(), "一百二十三");
        assert_eq!(number_to_hanzi("-5").unwrap(), "负五");
    }

    #[test]
    fn rejects_bad_decimals() {
        assert!(number_to_hanzi("1.").is_err());
        assert!(number_to_hanzi("1.2.3").is_err());
        assert!(number_to_hanzi(".5").is_err());
    }
}
