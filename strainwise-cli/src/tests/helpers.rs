//! Test helpers for laying out catalog, preference and state files.

use camino::{Utf8Path, Utf8PathBuf};
use strainwise_core::test_support::sample_catalog;
use strainwise_core::{ExperienceLevel, ThcTolerance, TimeOfUse, UserPreferences};
use tempfile::TempDir;

/// Fixed clock reading used by command tests.
pub(super) const NOW: u64 = 1_750_000_000;
pub(super) const DAY: u64 = 86_400;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    strainwise_fs::write_utf8(path, contents).expect("write test file");
}

/// Temporary directory holding the files a command reads and writes.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn state(&self) -> Utf8PathBuf {
        self.root.join("state.json")
    }

    pub(super) fn preferences(&self) -> Utf8PathBuf {
        self.root.join("preferences.json")
    }

    /// Write the shared sample catalog and return its path.
    pub(super) fn write_sample_catalog(&self) -> Utf8PathBuf {
        let path = self.catalog();
        let payload = serde_json::to_string_pretty(&sample_catalog()).expect("serialise catalog");
        write_utf8(&path, payload.as_bytes());
        path
    }

    /// Write a beginner profile that wants sleep and return its path.
    pub(super) fn write_beginner_preferences(&self) -> Utf8PathBuf {
        let path = self.preferences();
        let payload =
            serde_json::to_string_pretty(&beginner()).expect("serialise preferences");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

pub(super) fn beginner() -> UserPreferences {
    UserPreferences::new(
        ExperienceLevel::Beginner,
        ThcTolerance::Low,
        TimeOfUse::Night,
    )
    .with_desired_effects(["sleepy", "relaxed"])
    .with_avoid_effects(["anxious"])
}
