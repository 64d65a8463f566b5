//! Positional message arguments (`{0}`, `{1}`, ...).

/// Substitutes `{n}` placeholders in `pattern` with `args[n]`.
///
/// A single left-to-right pass: substituted text is never scanned again.
/// Placeholders without a matching argument, and braces that do not enclose
/// a plain index, are kept verbatim.
///
/// # Examples
/// ```
/// use feedback_hub_imagga::message::format_message;
///
/// let text = format_message("Imagga responded with a problem: \"{1}\"", &["imagga", "timeout"]);
/// assert_eq!(text, "Imagga responded with a problem: \"timeout\"");
/// ```
#[must_use]
pub fn format_message(pattern: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        let (before, from_open) = rest.split_at(open);
        result.push_str(before);

        let substituted = from_open.find('}').and_then(|close| {
            let index = from_open.get(1..close)?;
            let arg = parse_index(index).and_then(|i| args.get(i))?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = from_open.get(close + 1..).unwrap_or_default();
            }
            None => {
                result.push('{');
                rest = from_open.get(1..).unwrap_or_default();
            }
        }
    }
    result.push_str(rest);
    result
}

/// Parses the text between braces as an argument index.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
