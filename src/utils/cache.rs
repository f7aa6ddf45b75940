//! Session cache for the resource manifest.
//!
//! sessionStorage is cleared when the tab closes, so a new visit picks up
//! a rebuilt manifest while in-session navigation reuses the fetched one.

use docnav_core::Manifest;

use super::dom;
use crate::config::cache::MANIFEST_KEY;

/// Cache write errors.
#[derive(Debug, Clone)]
pub enum CacheError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to write to storage (quota, private mode).
    WriteFailed,
}

/// Manifest stored earlier in this session.
///
/// An entry that no longer decodes is removed and treated as a miss.
pub fn load_manifest() -> Option<Manifest> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(MANIFEST_KEY).ok()??;
    match Manifest::from_json(&json) {
        Ok(manifest) => Some(manifest),
        Err(_) => {
            let _ = storage.remove_item(MANIFEST_KEY);
            None
        }
    }
}

pub fn store_manifest(manifest: &Manifest) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(manifest).map_err(|_| CacheError::WriteFailed)?;
    storage
        .set_item(MANIFEST_KEY, &json)
        .map_err(|_| CacheError::WriteFailed)
}
