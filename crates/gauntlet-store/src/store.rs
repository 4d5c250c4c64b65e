use crate::error::{StoreError, StoreResult};
use gauntlet_core::{find_by_id, id_exists, Record, RecordId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-collection blob file names.
pub mod collection_files {
    pub const PHYSICAL_RESOURCES: &str = "ResourcesPhysical.bin";
    pub const CLOUD_RESOURCES: &str = "ResourcesCloud.bin";
    pub const VNF_SERVICES: &str = "ResourcesVNFServices.bin";
    pub const RECIPIENTS: &str = "Recipients.bin";
    pub const TEST_CASES: &str = "TestCases.bin";
    pub const METRIC_DEFINITIONS: &str = "DefinitionsMetrics.bin";
    pub const CHALLENGE_DEFINITIONS: &str = "DefinitionsChallenges.bin";
    pub const TEST_DEFINITIONS: &str = "DefinitionsTests.bin";
}

/// Whole-collection load/save over bincode blobs in one directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    /// Store rooted at `data_dir`. The directory is created on first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory the blobs live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether a collection file exists yet.
    pub fn exists(&self, collection: &str) -> bool {
        self.data_dir.join(collection).exists()
    }

    /// Load a whole collection. A missing file is [`StoreError::NotFound`];
    /// anything else that fails means the file is corrupt.
    pub fn load<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let path = self.data_dir.join(collection);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "collection file not found");
                return Err(StoreError::NotFound(path));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let (records, _) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard()).map_err(
                |err| StoreError::Corrupt {
                    path: path.clone(),
                    detail: err.to_string(),
                },
            )?;
        debug!(path = %path.display(), "collection loaded");
        Ok(records)
    }

    /// Replace a whole collection. Writes to a temp file in the same
    /// directory, then renames over the target, so a crash mid-write
    /// never leaves a truncated blob behind.
    pub fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> StoreResult<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;
        let path = self.data_dir.join(collection);
        let bytes = bincode::serde::encode_to_vec(records, bincode::config::standard())
            .map_err(|err| StoreError::Serialization(err.to_string()))?;

        let tmp = path.with_extension("bin.tmp");
        std::fs::write(&tmp, &bytes).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), records = records.len(), "collection saved");
        Ok(())
    }

    /// Append one record, rejecting duplicate IDs. The catalog is
    /// ever-growing by design: records are never removed or mutated.
    pub fn add<T>(&self, collection: &str, record: T) -> StoreResult<Vec<T>>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let mut records: Vec<T> = self.load(collection)?;
        if id_exists(record.id(), &records) {
            return Err(StoreError::DuplicateId {
                id: record.id(),
                collection: collection.to_string(),
            });
        }
        records.push(record);
        self.save(collection, &records)?;
        Ok(records)
    }

    /// Load a collection and scan it for one record.
    pub fn find_by_id<T>(&self, collection: &str, id: RecordId) -> StoreResult<Option<T>>
    where
        T: Record + Clone + DeserializeOwned,
    {
        let records: Vec<T> = self.load(collection)?;
        Ok(find_by_id(id, &records).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::TestCase;

    fn store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        (dir, store)
    }

    fn cases() -> Vec<TestCase> {
        vec![
            TestCase::new(1, "resiliency-pif-001", "https://tracker.example/CASE-1"),
            TestCase::new(2, "resiliency-pif-002", "https://tracker.example/CASE-2"),
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = store();
        let original = cases();
        store.save(collection_files::TEST_CASES, &original).unwrap();
        let loaded: Vec<TestCase> = store.load(collection_files::TEST_CASES).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, store) = store();
        let err = store.load::<TestCase>(collection_files::TEST_CASES).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (dir, store) = store();
        std::fs::write(dir.path().join(collection_files::TEST_CASES), b"not bincode").unwrap();
        let err = store.load::<TestCase>(collection_files::TEST_CASES).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let (_dir, store) = store();
        store.save(collection_files::TEST_CASES, &cases()).unwrap();

        let dup = TestCase::new(2, "duplicate", "https://tracker.example/CASE-2");
        let err = store.add(collection_files::TEST_CASES, dup).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { id: 2, .. }));

        let fresh = TestCase::new(33, "resiliency-xyz", "https://tracker.example/CASE-400");
        let records = store.add(collection_files::TEST_CASES, fresh).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn find_by_id_scans_stored_collection() {
        let (_dir, store) = store();
        store.save(collection_files::TEST_CASES, &cases()).unwrap();

        let found: Option<TestCase> =
            store.find_by_id(collection_files::TEST_CASES, 2).unwrap();
        assert_eq!(found.map(|c| c.name), Some("resiliency-pif-002".to_string()));

        let missing: Option<TestCase> =
            store.find_by_id(collection_files::TEST_CASES, 257).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, store) = store();
        store.save(collection_files::TEST_CASES, &cases()).unwrap();
        let shorter = vec![TestCase::new(9, "only", "https://tracker.example/CASE-9")];
        store.save(collection_files::TEST_CASES, &shorter).unwrap();
        let loaded: Vec<TestCase> = store.load(collection_files::TEST_CASES).unwrap();
        assert_eq!(loaded, shorter);
    }
}
