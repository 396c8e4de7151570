use std::borrow::Cow;

/// Board label for the `C` (cell/ground) duty.
pub const CELL_DUTY_LABEL: &str = "세포";

/// Heading shown for a canonical key on the board.
pub fn display_label(key: &str) -> Cow<'_, str> {
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Owned(format!("{key}R"));
    }
    match key {
        "C" => Cow::Borrowed(CELL_DUTY_LABEL),
        "E1" => Cow::Borrowed("E"),
        "OFF" => Cow::Borrowed("OFF"),
        "ST" => Cow::Borrowed("Station"),
        _ => Cow::Borrowed(key),
    }
}
