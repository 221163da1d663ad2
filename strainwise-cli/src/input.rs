//! Shared helpers for loading inputs and writing command output.

use std::io::{BufReader, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use strainwise_core::{
    Catalog, JsonFileStateStore, StateStore, StorefrontState, UserPreferences, VerificationPolicy,
};
use strainwise_fs::open_utf8_file;

use crate::{ARG_CATALOG, ARG_PREFERENCES, CliError};

/// Catalog file used when no path is configured.
pub(crate) const DEFAULT_CATALOG: &str = "catalog.json";
/// State file used when no path is configured.
pub(crate) const DEFAULT_STATE: &str = "state.json";

pub(crate) fn catalog_or_default(path: Option<Utf8PathBuf>) -> Utf8PathBuf {
    path.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG))
}

pub(crate) fn state_or_default(path: Option<Utf8PathBuf>) -> Utf8PathBuf {
    path.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_STATE))
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match strainwise_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON document from `path`, labelling failures with `field`.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate the product catalog.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let catalog: Catalog = load_json(path, ARG_CATALOG)?;
    catalog
        .validate()
        .map_err(|source| CliError::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(catalog)
}

/// Load the state, failing unless it holds a verification valid at `now`.
pub(crate) fn load_verified_state(
    store: &JsonFileStateStore,
    now: u64,
) -> Result<StorefrontState, CliError> {
    let state = store.load()?;
    if state.is_age_verified(&VerificationPolicy::default(), now) {
        Ok(state)
    } else {
        Err(CliError::AgeNotVerified {
            path: store.path().to_path_buf(),
        })
    }
}

/// Pick the preferences file when given, else stored onboarding answers,
/// else the default profile.
pub(crate) fn resolve_preferences(
    explicit: Option<&Utf8Path>,
    state: &StorefrontState,
) -> Result<UserPreferences, CliError> {
    match explicit {
        Some(path) => load_json(path, ARG_PREFERENCES),
        None => Ok(state.preferences_or_default()),
    }
}

/// Current time in seconds since the Unix epoch.
pub(crate) fn now_unix() -> Result<u64, CliError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(CliError::Clock)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
