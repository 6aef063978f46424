use crate::is_word_char;
use std::ops::Range;

/// Byte range of the first usable occurrence of `marker` in `query`.
///
/// An occurrence is usable when it:
/// * is not followed by a word character (`:log` never matches inside `:logContent`, `?` never
///   matches `?1`)
/// * is not the tail of a `::` cast, for named markers
/// * lies outside single and double quoted spans
/// * does not overlap any of the `consumed` ranges
///
/// Quoted spans are tracked by toggling on the opening quote character, a doubled quote inside a
/// literal closes and reopens it. Backslash escapes and comments are not recognized.
pub fn find_marker(query: &str, marker: &str, consumed: &[Range<usize>]) -> Option<Range<usize>> {
    let named = marker.starts_with(':');
    if marker.is_empty() || (named && marker.len() == 1) {
        return None;
    }
    let mut quote = None;
    for (i, c) in query.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        if c == '\'' || c == '"' {
            quote = Some(c);
            continue;
        }
        if !query[i..].starts_with(marker) {
            continue;
        }
        let end = i + marker.len();
        if query[end..].chars().next().is_some_and(is_word_char)
            || (named && query[..i].ends_with(':'))
            || consumed.iter().any(|r| r.start < end && i < r.end)
        {
            continue;
        }
        return Some(i..end);
    }
    None
}

/// Replace each range of `query` with its text. Ranges must not overlap.
pub fn splice(query: &str, mut replacements: Vec<(Range<usize>, String)>) -> String {
    replacements.sort_by_key(|(range, _)| range.start);
    let mut out = String::with_capacity(
        query.len() + replacements.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut position = 0;
    for (range, text) in replacements {
        out.push_str(&query[position..range.start]);
        out.push_str(&text);
        position = range.end;
    }
    out.push_str(&query[position..]);
    out
}
