use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

/// Payload read back through [`KeyedBlobStore::get_json`]: either a document
/// that parsed cleanly as JSON, or the raw bytes rendered as a string.
/// Serialized untagged so response bodies carry whichever shape applies.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BlobContent {
    Document(Value),
    Raw(String),
}

/// Concurrency-safe mapping from string keys to byte payloads. One coarse
/// reader/writer lock guards the whole key space; there is no per-key
/// locking, no eviction and no delete, so entries live until the process
/// exits.
pub struct KeyedBlobStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl KeyedBlobStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `payload` under `key`, silently replacing any previous value.
    pub fn put(&self, key: &str, payload: Vec<u8>) {
        self.entries.write().insert(key.to_owned(), payload);
    }

    /// Returns a copy of the payload, or `None` when the key was never
    /// written. Absence is a normal result, not an error.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().get(key).cloned()
    }

    /// Stores a whole JSON document under an id taken from its `id` field,
    /// falling back to `upload_<unix-seconds>` when the field is absent or
    /// unusable. Fallback ids minted within the same second can collide;
    /// that weak uniqueness is a documented property of the upload path.
    /// Nothing is stored if the document fails to serialize.
    pub fn put_json(&self, doc: &Value) -> Result<String, serde_json::Error> {
        let id = derive_id(doc).unwrap_or_else(|| format!("upload_{}", unix_seconds()));
        let payload = serde_json::to_vec(doc)?;
        self.put(&id, payload);
        Ok(id)
    }

    /// Reads back a payload, parsing it as JSON when possible. Bytes that
    /// were not valid JSON come back as [`BlobContent::Raw`].
    pub fn get_json(&self, key: &str) -> Option<BlobContent> {
        let payload = self.get(key)?;
        match serde_json::from_slice(&payload) {
            Ok(doc) => Some(BlobContent::Document(doc)),
            Err(_) => Some(BlobContent::Raw(
                String::from_utf8_lossy(&payload).into_owned(),
            )),
        }
    }
}

impl Default for KeyedBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

// Tolerates missing or wrong-typed `id` fields; only values with an obvious
// string rendering are used, everything else falls through to the timestamp.
fn derive_id(doc: &Value) -> Option<String> {
    let id = match doc.get("id")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if id.is_empty() {
        return None;
    }
    Some(id)
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
