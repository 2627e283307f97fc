/// Caret offset to apply after the raw text of a change event was replaced by `formatted`.
///
/// `None` leaves the caret where the field puts it after the update (the end). A host caret of
/// `0` or no caret at all counts as end-of-text, and so does any caret at or after the end.
///
/// When the two texts differ only in grouping separators the caret keeps the same number of
/// non-separator characters in front of it. Otherwise it moves by the change in length.
pub(crate) fn track_caret(
    raw: &str,
    formatted: &str,
    caret: Option<usize>,
    grouping: Option<char>,
) -> Option<usize> {
    let raw_len = raw.chars().count();
    let caret = caret.filter(|&pos| pos > 0).unwrap_or(raw_len);
    if caret >= raw_len {
        return None;
    }

    if let Some(sep) = grouping {
        if raw.chars().filter(|&ch| ch != sep).eq(formatted.chars().filter(|&ch| ch != sep)) {
            let kept = raw.chars().take(caret).filter(|&ch| ch != sep).count();
            return Some(anchor_after(formatted, kept, sep));
        }
    }

    let formatted_len = formatted.chars().count();
    let shifted = caret as isize + formatted_len as isize - raw_len as isize;
    Some(shifted.clamp(0, formatted_len as isize) as usize)
}

/// Smallest offset in `text` preceded by `count` characters other than `sep`.
fn anchor_after(text: &str, count: usize, sep: char) -> usize {
    if count == 0 {
        return 0;
    }
    let mut seen = 0;
    for (idx, ch) in text.chars().enumerate() {
        if ch != sep {
            seen += 1;
            if seen == count {
                return idx + 1;
            }
        }
    }
    text.chars().count()
}
