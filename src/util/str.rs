pub(crate) trait StrExt {
    fn starts_with_ignore_case(&self, start: &str) -> bool;

    fn ends_with_ignore_case(&self, end: &str) -> bool;
}

impl StrExt for str {
    fn starts_with_ignore_case(&self, start: &str) -> bool {
        self.len() >= start.len()
            && self.is_char_boundary(start.len())
            && self[..start.len()].eq_ignore_ascii_case(start)
    }

    fn ends_with_ignore_case(&self, end: &str) -> bool {
        let offset = self.len().wrapping_sub(end.len());

        self.len() >= end.len()
            && self.is_char_boundary(offset)
            && self[offset..].eq_ignore_ascii_case(end)
    }
}

pub(crate) fn prefix(prefix: &str, main: &str) -> String {
    let mut string = String::with_capacity(prefix.len() + main.len());
    string.push_str(prefix);
    string.push_str(main);
    string
}

/// Derives an XML `id` from a filename.
///
/// - Letters are lowercased.
/// - Whitespace is removed.
/// - A leading digit is prefixed with `id`, as an XML name cannot start with one.
pub(crate) fn xml_id(input: &str) -> String {
    const DIGIT_PREFIX: &str = "id";

    let mut id = String::with_capacity(input.len() + DIGIT_PREFIX.len());

    for c in input.chars().filter(|c| !c.is_whitespace()) {
        if id.is_empty() && c.is_ascii_digit() {
            id.push_str(DIGIT_PREFIX);
        }
        id.extend(c.to_lowercase());
    }
    id
}
