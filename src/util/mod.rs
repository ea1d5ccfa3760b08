use uuid::Uuid;

/// Fresh opaque id for a note list entry.
pub(crate) fn new_note_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_id_is_uuid_v4() {
        let id = new_note_id();
        let parsed = Uuid::parse_str(&id).expect("should be a uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_new_note_ids_differ() {
        assert_ne!(new_note_id(), new_note_id());
    }
}
