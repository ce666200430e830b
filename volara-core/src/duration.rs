/// Parses a formatted flight duration like "5h 15m" into total minutes.
///
/// Accepts an hour part, a minute part, or both ("5h", "45m", "5h 15m").
/// Returns `None` for anything else; callers sorting by duration place
/// unparseable values after every parseable one.
pub fn duration_minutes(formatted: &str) -> Option<u32> {
    let mut hours = 0u32;
    let mut minutes = 0u32;
    let mut matched = false;

    for part in formatted.split_whitespace() {
        if let Some(h) = part.strip_suffix('h') {
            hours = h.parse().ok()?;
            matched = true;
        } else if let Some(m) = part.strip_suffix('m') {
            minutes = m.parse().ok()?;
            matched = true;
        } else {
            return None;
        }
    }

    matched.then(|| hours * 60 + minutes)
}
