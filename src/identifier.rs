/// Extract the canonical numeric identifier from a raw field value.
///
/// The result is the first maximal run of decimal digits found in `raw`, with any characters
/// before it discarded and leading zeros preserved: `"ID-00042"` yields `"00042"`. A value
/// containing no digit yields `None`, which is the expected classification failure signal and
/// not an error. When several digit runs exist the first one wins, so `"a1b2"` yields `"1"`.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits)
}
