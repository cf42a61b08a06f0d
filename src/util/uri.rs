use std::borrow::Cow;
use std::path::{Component, Path};

/// Maximum length in bytes of a single filename within the container.
const MAX_FILE_NAME_LEN: usize = 255;

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Returns the scheme of a reference (e.g., `https` for `https://a.b/c.png`).
///
/// Single-letter schemes are not recognized,
/// so Windows drive paths (`C:\dir\file.png`) are treated as paths.
pub(crate) fn scheme(reference: &str) -> Option<&str> {
    let (scheme, _) = reference.split_once(':')?;
    let mut chars = scheme.chars();

    let valid = scheme.len() > 1
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid.then_some(scheme)
}

/// Removes the `?query` and `#fragment` of a reference that has a scheme.
pub(crate) fn strip_query_and_fragment(reference: &str) -> &str {
    if scheme(reference).is_none() {
        return reference;
    }
    reference
        .find(['?', '#'])
        .map_or(reference, |position| &reference[..position])
}

/// Returns the final path segment of a local path or URL.
///
/// URLs have their query and fragment removed and are percent-decoded.
pub(crate) fn file_name(reference: &str) -> Cow<'_, str> {
    let stripped = strip_query_and_fragment(reference);
    let name = stripped
        .rfind(['/', '\\'])
        .map_or(stripped, |index| &stripped[index + 1..]);

    if scheme(reference).is_some() {
        decode(name)
    } else {
        Cow::Borrowed(name)
    }
}

/// Returns the lowercased extension of a filename, including the leading dot,
/// or an empty string when there is none.
pub(crate) fn file_extension(name: &str) -> String {
    name.rfind('.')
        .map(|index| name[index..].to_ascii_lowercase())
        .unwrap_or_default()
}

/// Whether `name` can be used as-is as a single path element in the container.
pub(crate) fn is_valid_file_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_FILE_NAME_LEN
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Converts a relative path to the forward-slash form used within the archive.
pub(crate) fn to_slash(path: &Path) -> String {
    let mut joined = String::new();

    for component in path.components() {
        if let Component::Normal(segment) = component {
            if !joined.is_empty() {
                joined.push('/');
            }
            joined.push_str(&segment.to_string_lossy());
        }
    }
    joined
}
