/// Route prefix every note lives under.
pub(crate) const NOTE_ROUTE_PREFIX: &str = "/note/";

pub(crate) const ROOT_PATH: &str = "/";

pub(crate) fn note_path(name: &str) -> String {
    format!("{NOTE_ROUTE_PREFIX}{}", urlencoding::encode(name))
}

/// Decodes a route segment back into a note name.
///
/// Segments that do not decode to valid UTF-8 are taken verbatim.
pub(crate) fn decode_note_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Current note name addressed by `path`, if any.
pub(crate) fn note_name_from_path(path: &str) -> Option<String> {
    let segment = path.strip_prefix(NOTE_ROUTE_PREFIX)?;
    let segment = segment.split(['?', '#']).next().unwrap_or_default();
    if segment.is_empty() {
        return None;
    }
    Some(decode_note_segment(segment))
}
