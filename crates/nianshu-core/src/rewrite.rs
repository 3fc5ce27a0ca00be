//! Numeral rewrite pipeline.
//!
//! Ordered pattern passes over the whole text. Each pass recognizes one
//! numeral context (date component, fraction, percent, temperature, bare
//! number) and substitutes its spoken form. Passes run most-specific
//! first and consume their marker glyphs, so the catch-all number pass
//! never re-reads a span an earlier pass already handled — once digits
//! become hanzi they are unmatchable by later digit-seeking patterns.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::VerbalizeError;
use crate::types::{PassKind, RewriteChange, RewriteOutcome};
use crate::verbalize::{digits_to_hanzi, integer_to_hanzi, number_to_hanzi};

// Compiled regexes — allocated once, reused across calls.
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)年").unwrap());
static RE_MONTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)月").unwrap());
static RE_DAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)日").unwrap());
static RE_FRACTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").unwrap());
static RE_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?)(\d+(?:\.\d+)?)%").unwrap());
static RE_CELSIUS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(-?)(\d+)℃").unwrap());
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?)(\d+(?:\.\d+)?)").unwrap());

const NEGATIVE_WORD: &str = "负";
const PERCENT_WORD: &str = "百分之";
const FRACTION_WORD: &str = "分之";
const CELSIUS_WORD: &str = "摄氏度";

/// Rewrite every recognized numeral span in `text` into spoken-form
/// Chinese, leaving all other characters untouched.
///
/// Any pass failure aborts the whole conversion; no partial output.
pub fn verbalize_numerals(text: &str) -> Result<String, VerbalizeError> {
    Ok(rewrite(text)?.text)
}

/// Like [`verbalize_numerals`], but also reports which spans each pass
/// replaced.
pub fn rewrite(text: &str) -> Result<RewriteOutcome, VerbalizeError> {
    let mut changes = Vec::new();

    // Date components: years are read digit-by-digit, month/day as
    // magnitudes, so both must be claimed before the catch-all pass.
    let t = apply(text, &RE_YEAR, PassKind::Year, &mut changes, |c| {
        Ok(format!("{}年", digits_to_hanzi(&c[1])))
    })?;
    let t = apply(&t, &RE_MONTH, PassKind::Month, &mut changes, |c| {
        Ok(format!("{}月", integer_to_hanzi(&c[1])?))
    })?;
    let t = apply(&t, &RE_DAY, PassKind::Day, &mut changes, |c| {
        Ok(format!("{}日", integer_to_hanzi(&c[1])?))
    })?;

    // 分之 names the denominator first, so input order inverts.
    let t = apply(&t, &RE_FRACTION, PassKind::Fraction, &mut changes, |c| {
        Ok(format!(
            "{}{}{}",
            integer_to_hanzi(&c[2])?,
            FRACTION_WORD,
            integer_to_hanzi(&c[1])?
        ))
    })?;

    let t = apply(&t, &RE_PERCENT, PassKind::Percent, &mut changes, |c| {
        Ok(format!(
            "{}{}{}",
            sign_word(&c[1]),
            PERCENT_WORD,
            number_to_hanzi(&c[2])?
        ))
    })?;

    let t = apply(&t, &RE_CELSIUS, PassKind::Celsius, &mut changes, |c| {
        Ok(format!(
            "{}{}{}",
            sign_word(&c[1]),
            integer_to_hanzi(&c[2])?,
            CELSIUS_WORD
        ))
    })?;

    // Catch-all: any digit run the specific passes left behind.
    let t = apply(&t, &RE_NUMBER, PassKind::Number, &mut changes, |c| {
        Ok(format!("{}{}", sign_word(&c[1]), number_to_hanzi(&c[2])?))
    })?;

    Ok(RewriteOutcome { text: t, changes })
}

fn sign_word(captured: &str) -> &'static str {
    if captured == "-" { NEGATIVE_WORD } else { "" }
}

/// One left-to-right, non-overlapping scan: every match is replaced by
/// `substitute(&captures)`, everything between matches is copied through
/// verbatim. The first substitution error aborts the scan.
fn apply(
    text: &str,
    re: &Regex,
    pass: PassKind,
    changes: &mut Vec<RewriteChange>,
    substitute: impl Fn(&Captures) -> Result<String, VerbalizeError>,
) -> Result<String, VerbalizeError> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let m = caps.get(0).unwrap();
        let replacement = substitute(&caps)?;
        out.push_str(&text[last..m.start()]);
        out.push_str(&replacement);
        changes.push(RewriteChange {
            pass,
            matched: m.as_str().to_string(),
            replacement,
        });
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}
