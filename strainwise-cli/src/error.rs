//! Error types emitted by the Strainwise CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use strainwise_core::{CatalogError, Category, StateStoreError};
use strainwise_scorer::RankingWeightsError;
use thiserror::Error;

/// Errors emitted by the Strainwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening a JSON input failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON input could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The catalog failed validation.
    #[error("catalog at {path:?} is invalid: {source}")]
    InvalidCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// Loading or saving the storefront state failed.
    #[error(transparent)]
    State(#[from] StateStoreError),
    /// The command requires a current age verification.
    #[error("age verification in {path:?} is missing or expired (run `strainwise verify-age --confirm`)")]
    AgeNotVerified { path: Utf8PathBuf },
    /// `verify-age` was invoked without the confirmation flag.
    #[error("confirm you are of legal age by passing --confirm")]
    ConfirmationRequired,
    /// The requested category cannot be ranked.
    #[error("{category} cannot be ranked")]
    UnrankableCategory { category: Category },
    /// No item with the given id exists in the requested category.
    #[error("no {category} item with id {id:?} in the catalog")]
    UnknownItem { category: Category, id: String },
    /// The ranking configuration was rejected.
    #[error(transparent)]
    RankingWeights(#[from] RankingWeightsError),
    /// The system clock reported a time before the Unix epoch.
    #[error("system clock is set before the Unix epoch: {0}")]
    Clock(#[source] std::time::SystemTimeError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
