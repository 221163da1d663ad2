//! File-backed [`StateStore`] writing pretty-printed JSON.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use strainwise_fs::{read_utf8_to_string, write_utf8};

use super::{StateStore, StateStoreError, StorefrontState};

/// Persist storefront state as a JSON document at a UTF-8 path.
///
/// A missing file loads as the default state. Saving creates the parent
/// directory when needed and replaces the file contents.
///
/// # Examples
/// ```no_run
/// use camino::Utf8PathBuf;
/// use strainwise_core::{JsonFileStateStore, StateStore};
///
/// let mut store = JsonFileStateStore::new(Utf8PathBuf::from("state.json"));
/// let mut state = store.load().expect("load state");
/// state.verify_age(1_700_000_000);
/// store.save(&state).expect("save state");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStateStore {
    path: Utf8PathBuf,
}

impl JsonFileStateStore {
    /// Create a store backed by `path`.
    #[must_use]
    pub const fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_error(&self, source: io::Error) -> StateStoreError {
        StateStoreError::Read {
            location: self.path.to_string(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StateStoreError {
        StateStoreError::Write {
            location: self.path.to_string(),
            source,
        }
    }
}

impl StateStore for JsonFileStateStore {
    fn load(&self) -> Result<StorefrontState, StateStoreError> {
        let payload = match read_utf8_to_string(&self.path) {
            Ok(payload) => payload,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                log::debug!("no storefront state at {}; starting fresh", self.path);
                return Ok(StorefrontState::default());
            }
            Err(source) => return Err(self.read_error(source)),
        };
        serde_json::from_str(&payload).map_err(|source| StateStoreError::Decode {
            location: self.path.to_string(),
            source,
        })
    }

    fn save(&mut self, state: &StorefrontState) -> Result<(), StateStoreError> {
        let mut payload = serde_json::to_string_pretty(state).map_err(StateStoreError::Encode)?;
        payload.push('\n');
        write_utf8(&self.path, payload.as_bytes()).map_err(|source| self.write_error(source))
    }
}
