//! Focused unit tests covering CLI configuration and input loading.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::compatibility::{CompatibilityArgs, CompatibilityConfig};
use crate::input::{load_catalog, load_json, require_existing};
use crate::onboard::{OnboardArgs, OnboardConfig};
use crate::recommend::{RecommendArgs, RecommendConfig, config_from_layers_for_test};
use crate::save::{SaveArgs, SaveConfig};
use camino::Utf8PathBuf;
use rstest::rstest;
use strainwise_core::{Category, UserPreferences};

#[rstest]
fn recommend_config_falls_back_to_defaults() {
    let config = RecommendConfig::try_from(RecommendArgs::default()).expect("config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from("catalog.json"));
    assert_eq!(config.state, Utf8PathBuf::from("state.json"));
    assert_eq!(config.preferences, None);
    assert_eq!(config.category, Category::Strains);
    assert_eq!(config.limit, 20);
}

#[rstest]
fn converting_compatibility_without_item_errors() {
    let err = CompatibilityConfig::try_from(CompatibilityArgs::default())
        .expect_err("missing item id should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ITEM_ID);
            assert_eq!(env, ENV_COMPATIBILITY_ITEM_ID);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_onboard_without_preferences_errors() {
    let err = OnboardConfig::try_from(OnboardArgs::default())
        .expect_err("missing preferences should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PREFERENCES);
            assert_eq!(env, ENV_ONBOARD_PREFERENCES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::missing_category(None, Some("blue-dream"), ARG_CATEGORY)]
#[case::missing_item(Some(Category::Strains), None, ARG_ITEM_ID)]
fn converting_save_without_positionals_errors(
    #[case] category: Option<Category>,
    #[case] item_id: Option<&str>,
    #[case] expected_field: &'static str,
) {
    let args = SaveArgs {
        category,
        item_id: item_id.map(str::to_owned),
        ..SaveArgs::default()
    };
    let err = SaveConfig::try_from(args).expect_err("missing positional should error");
    match err {
        CliError::MissingArgument { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        catalog: workspace.catalog(),
        preferences: None,
        state: workspace.state(),
        category: Category::Strains,
        limit: 20,
    };
    let err = config.validate_sources().expect_err("catalog is absent");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, workspace.catalog());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_preferences() {
    let workspace = Workspace::new();
    workspace.write_sample_catalog();
    let config = RecommendConfig {
        catalog: workspace.catalog(),
        preferences: Some(workspace.preferences()),
        state: workspace.state(),
        category: Category::Strains,
        limit: 20,
    };
    let err = config.validate_sources().expect_err("preferences are absent");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_PREFERENCES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn require_existing_reports_directories() {
    let workspace = Workspace::new();
    let path = workspace.root().join("catalog-dir");
    std::fs::create_dir(&path).expect("catalog directory");

    let err = require_existing(&path, ARG_CATALOG).expect_err("directory is not a file");
    match err {
        CliError::SourcePathNotFile { field, path: reported } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(reported, path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_rejects_duplicate_ids() {
    let workspace = Workspace::new();
    let path = workspace.catalog();
    write_utf8(
        &path,
        br#"{"strains": [
            {"id": "twin", "name": "Twin", "type": "hybrid", "thc": 18.0},
            {"id": "twin", "name": "Twin Again", "type": "indica", "thc": 20.0}
        ]}"#,
    );

    let err = load_catalog(&path).expect_err("duplicate ids should be rejected");
    match err {
        CliError::InvalidCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected InvalidCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_json_reports_invalid_documents() {
    let workspace = Workspace::new();
    let path = workspace.preferences();
    write_utf8(&path, b"{ not valid json");

    let err = load_json::<UserPreferences>(&path, ARG_PREFERENCES)
        .expect_err("invalid json should error");
    match err {
        CliError::ParseInput { field, .. } => assert_eq!(field, ARG_PREFERENCES),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_json_reports_unreadable_files() {
    let workspace = Workspace::new();
    let err = load_json::<UserPreferences>(&workspace.preferences(), ARG_PREFERENCES)
        .expect_err("missing file should error");
    match err {
        CliError::OpenInput { field, .. } => assert_eq!(field, ARG_PREFERENCES),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "plenty" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_catalog = workspace.root().join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": workspace.root().join("from-file.json").as_str(),
            "limit": 5,
            "category": "cartridges",
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": env_catalog.as_str(),
    }));
    composer.push_cli(json!({
        "category": "concentrates",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog, env_catalog);
    assert_eq!(config.limit, 5);
    assert_eq!(config.category, Category::Concentrates);
    assert_eq!(config.state, Utf8PathBuf::from("state.json"));
}
