use super::error::NoteNameError;
use crate::models::NoteListEntry;
use crate::storage::RESERVED_KEYS;

/// Characters that would break the note's route segment.
const ILLEGAL_CHARS: [char; 2] = ['#', '/'];

/// Dot segments, which URL parsing collapses out of the note's route.
const DOT_SEGMENTS: [&str; 2] = [".", ".."];

/// Checks a candidate name against the current index.
///
/// Checks run in a fixed order (empty, reserved, taken, illegal character) and
/// the first failure wins. `renaming` names an entry to leave out of the
/// uniqueness check, so a note never collides with itself.
pub(crate) fn check_name(
    candidate: &str,
    notes: &[NoteListEntry],
    renaming: Option<&str>,
) -> Result<(), NoteNameError> {
    if candidate.trim().is_empty() {
        return Err(NoteNameError::Empty);
    }

    if RESERVED_KEYS.contains(&candidate) {
        return Err(NoteNameError::Reserved);
    }

    let lowered = candidate.to_lowercase();
    let taken = notes
        .iter()
        .filter(|n| Some(n.name.as_str()) != renaming)
        .any(|n| n.name.to_lowercase() == lowered);
    if taken {
        return Err(NoteNameError::Taken);
    }

    if candidate.contains(ILLEGAL_CHARS) || DOT_SEGMENTS.contains(&candidate) {
        return Err(NoteNameError::IllegalCharacter);
    }

    Ok(())
}
