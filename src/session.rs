//! Durable session slot: one key-value slot holding the serialized current
//! identity. Absence means "no session". Restoration failures (missing file,
//! corrupt JSON, unknown version) degrade to no session; they never fail
//! startup.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::Identity;

/// Current on-disk format version. Bump when the envelope layout changes;
/// unknown versions restore as "no session".
const SESSION_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SessionEnvelope {
    version: u32,
    identity: Identity,
}

/// Storage backend for the current session.
pub trait SessionStore: Send + 'static {
    /// Restore the persisted identity, if any.
    fn load(&self) -> Option<Identity>;
    /// Persist the identity. Failures are logged, not surfaced; a session
    /// that fails to persist still works for the rest of the process.
    fn save(&mut self, identity: &Identity);
    /// Remove any persisted identity. Idempotent.
    fn clear(&mut self);
}

/// JSON-file-backed session slot.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Identity> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %self.path.display(), "No persisted session");
                return None;
            }
        };
        let envelope: SessionEnvelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session data");
                return None;
            }
        };
        if envelope.version != SESSION_VERSION {
            warn!(
                found = envelope.version,
                expected = SESSION_VERSION,
                "Ignoring session with unknown version"
            );
            return None;
        }
        Some(envelope.identity)
    }

    fn save(&mut self, identity: &Identity) {
        let envelope = SessionEnvelope {
            version: SESSION_VERSION,
            identity: identity.clone(),
        };
        let json = match serde_json::to_string_pretty(&envelope) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "Failed to create session directory");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist session");
        }
    }

    fn clear(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to clear session");
            }
        }
    }
}

/// In-memory session slot for tests and hosts without a writable disk.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Option<Identity>,
}

impl MemorySessionStore {
    /// A slot that already holds a session, as if persisted by a previous run.
    pub fn preloaded(identity: Identity) -> Self {
        Self {
            slot: Some(identity),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Identity> {
        self.slot.clone()
    }

    fn save(&mut self, identity: &Identity) {
        self.slot = Some(identity.clone());
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
