//! Base record identity shared by every catalog entity.

/// Catalog record identifier. IDs are arbitrary positive integers
/// chosen by whoever authors the catalog; references between records
/// are by ID with no enforced integrity.
pub type RecordId = u32;

/// Common identity carried by every persisted record.
pub trait Record {
    /// Record ID, unique within its collection.
    fn id(&self) -> RecordId;
    /// Human-readable name.
    fn name(&self) -> &str;
}

/// Linear scan for a record by ID. Collections are small (an
/// operator-maintained catalog), so no index is kept.
pub fn find_by_id<T: Record>(id: RecordId, items: &[T]) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Whether a record with this ID is already present.
pub fn id_exists<T: Record>(id: RecordId, items: &[T]) -> bool {
    find_by_id(id, items).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        id: RecordId,
        name: String,
    }

    impl Record for Dummy {
        fn id(&self) -> RecordId {
            self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn sample() -> Vec<Dummy> {
        vec![
            Dummy {
                id: 1,
                name: "one".into(),
            },
            Dummy {
                id: 5,
                name: "five".into(),
            },
        ]
    }

    #[test]
    fn find_by_id_scans_linearly() {
        let items = sample();
        assert_eq!(find_by_id(5, &items).map(|d| d.name()), Some("five"));
        assert!(find_by_id(2, &items).is_none());
    }

    #[test]
    fn id_exists_matches_find() {
        let items = sample();
        assert!(id_exists(1, &items));
        assert!(!id_exists(99, &items));
    }

    #[test]
    fn empty_collection_finds_nothing() {
        let items: Vec<Dummy> = vec![];
        assert!(find_by_id(1, &items).is_none());
    }
}
