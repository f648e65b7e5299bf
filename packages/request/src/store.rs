//! [`RequestStore`] implementations.

use std::path::{Path, PathBuf};

use ewaste_tracker_request_models::{DisposalRequest, RequestStatus};

use crate::record::{RawRequestRecord, normalize_all};
use crate::{RequestError, RequestStore};

/// Reads and validates every request in a JSON array file.
///
/// # Errors
///
/// Returns [`RequestError`] if the file cannot be read, is not a JSON
/// array of request documents, or contains a record that fails
/// validation.
pub fn load_requests(path: &Path) -> Result<Vec<DisposalRequest>, RequestError> {
    let contents = std::fs::read_to_string(path)?;
    let raws: Vec<RawRequestRecord> = serde_json::from_str(&contents)?;
    let requests = normalize_all(raws)?;
    log::debug!("Loaded {} request(s) from {}", requests.len(), path.display());
    Ok(requests)
}

/// A request store backed by a single JSON array file.
///
/// The file is read once on [`JsonFileStore::open`] and rewritten in full
/// after every status change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    requests: Vec<DisposalRequest>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is treated as an empty
    /// store.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the file exists but cannot be read or
    /// validated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RequestError> {
        let path = path.into();
        let requests = if path.exists() {
            load_requests(&path)?
        } else {
            log::warn!(
                "Request file {} does not exist, starting with an empty store",
                path.display()
            );
            Vec::new()
        };
        Ok(Self { path, requests })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), RequestError> {
        let raws: Vec<RawRequestRecord> = self.requests.iter().map(RawRequestRecord::from).collect();
        let json = serde_json::to_string_pretty(&raws)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RequestStore for JsonFileStore {
    fn all(&self) -> Result<Vec<DisposalRequest>, RequestError> {
        Ok(self.requests.clone())
    }

    fn insert(&mut self, request: DisposalRequest) -> Result<DisposalRequest, RequestError> {
        let stored = push_request(&mut self.requests, request)?;
        if let Err(e) = self.save() {
            self.requests.pop();
            return Err(e);
        }
        log::info!(
            "Stored request {} ({} kg {})",
            stored.id.as_deref().unwrap_or_default(),
            stored.weight_kg,
            stored.item_category
        );
        Ok(stored)
    }

    fn update_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> Result<DisposalRequest, RequestError> {
        let updated = set_status(&mut self.requests, id, status)?;
        self.save()?;
        log::info!("Request {id} is now {status}");
        Ok(updated)
    }
}

/// An in-memory request store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    requests: Vec<DisposalRequest>,
}

impl MemoryStore {
    /// Creates a store holding `requests`.
    #[must_use]
    pub const fn new(requests: Vec<DisposalRequest>) -> Self {
        Self { requests }
    }
}

impl RequestStore for MemoryStore {
    fn all(&self) -> Result<Vec<DisposalRequest>, RequestError> {
        Ok(self.requests.clone())
    }

    fn insert(&mut self, request: DisposalRequest) -> Result<DisposalRequest, RequestError> {
        push_request(&mut self.requests, request)
    }

    fn update_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> Result<DisposalRequest, RequestError> {
        set_status(&mut self.requests, id, status)
    }
}

fn push_request(
    requests: &mut Vec<DisposalRequest>,
    mut request: DisposalRequest,
) -> Result<DisposalRequest, RequestError> {
    let id = request
        .id
        .get_or_insert_with(|| uuid::Uuid::new_v4().simple().to_string())
        .clone();
    if requests.iter().any(|r| r.id.as_deref() == Some(id.as_str())) {
        return Err(RequestError::DuplicateId { id });
    }
    requests.push(request.clone());
    Ok(request)
}

fn set_status(
    requests: &mut [DisposalRequest],
    id: &str,
    status: RequestStatus,
) -> Result<DisposalRequest, RequestError> {
    let request = requests
        .iter_mut()
        .find(|r| r.id.as_deref() == Some(id))
        .ok_or_else(|| RequestError::NotFound { id: id.to_string() })?;
    request.status = status;
    Ok(request.clone())
}
