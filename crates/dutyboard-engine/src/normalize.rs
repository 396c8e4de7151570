//! Raw duty spelling → canonical [`DutyKey`].
//!
//! Rosters are typed by hand, so one duty shows up under many spellings
//! (`v`, `OV`, `W` all mean a day off). Codes are cleaned to uppercase
//! alphanumerics and then run through [`RULES`] in order; the first matching
//! rule decides the key. Rule order matters: `NN12` must be tried before the
//! generic `N` prefix, and exact codes like `D5` before the `D` prefix.

use dutyboard_common::CellValue;

use crate::DutyKey;

#[derive(Debug, Clone, Copy)]
enum Matcher {
    OneOf(&'static [&'static str]),
    AllDigits,
    Prefix(char),
}

impl Matcher {
    fn matches(&self, code: &str) -> bool {
        match self {
            Matcher::OneOf(codes) => codes.contains(&code),
            Matcher::AllDigits => !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()),
            Matcher::Prefix(c) => code.starts_with(*c),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    /// Replace the code with a fixed key.
    Fixed(&'static str),
    /// Keep the cleaned code as the key.
    Keep,
}

const RULES: &[(Matcher, Outcome)] = &[
    (Matcher::OneOf(&["NN12"]), Outcome::Fixed("NN12")),
    (Matcher::OneOf(&["V", "VF", "OV", "W"]), Outcome::Fixed("OFF")),
    (Matcher::OneOf(&["OF"]), Outcome::Fixed("OFF")),
    (Matcher::OneOf(&["P"]), Outcome::Fixed("P3")),
    (Matcher::OneOf(&["C"]), Outcome::Fixed("C")),
    (Matcher::OneOf(&["E1"]), Outcome::Fixed("E1")),
    (Matcher::OneOf(&["ST"]), Outcome::Fixed("ST")),
    (Matcher::OneOf(&["D5"]), Outcome::Fixed("D5")),
    (Matcher::OneOf(&["DB"]), Outcome::Fixed("DB")),
    (Matcher::OneOf(&["DC"]), Outcome::Fixed("DC")),
    // Digit strings pass through as-is: "03" stays "03".
    (Matcher::AllDigits, Outcome::Keep),
    (Matcher::Prefix('D'), Outcome::Keep),
    (Matcher::Prefix('E'), Outcome::Keep),
    (Matcher::Prefix('N'), Outcome::Fixed("N")),
];

/// Uppercase `raw` and drop everything that is not `A`-`Z` or `0`-`9`.
pub fn clean_code(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Canonical key for a raw duty spelling. Total: garbage in yields the cleaned
/// garbage back (possibly the empty key).
pub fn normalize(raw: &str) -> DutyKey {
    let code = clean_code(raw);
    let outcome = RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(&code))
        .map_or(Outcome::Keep, |(_, outcome)| *outcome);
    match outcome {
        Outcome::Fixed(key) => DutyKey::new(key.to_string()),
        Outcome::Keep => DutyKey::new(code),
    }
}

/// [`normalize`] applied to the textual form of a cell.
pub fn normalize_cell(cell: &CellValue) -> DutyKey {
    normalize(&cell.to_text())
}
