/// Removes `<...>` tag runs from a markup string, keeping the text.
///
/// Rich-text defaults embed markup that the plain-text summary must not
/// carry. Unterminated tags swallow the remainder of the input, matching
/// a greedy tag scan.
pub fn strip_markup(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut in_tag = false;

    for ch in src.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

/// True when the string carries markup worth preserving in rich output.
pub(crate) fn has_markup(src: &str) -> bool {
    src.contains('<')
}
