//! Behaviour-driven step definitions driving the storefront command scenarios.

use super::helpers::{NOW, Workspace};
use super::*;
use crate::compatibility::run_compatibility_with;
use crate::recommend::{Recommendation, run_recommend_with};
use crate::verify_age::run_verify_age_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct CommandWorld {
    workspace: Workspace,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn file_args(&self) -> Vec<String> {
        vec![
            format!("--{ARG_CATALOG}"),
            self.workspace.catalog().into_string(),
            format!("--{ARG_STATE}"),
            self.workspace.state().into_string(),
        ]
    }

    fn run(&self, argv: Vec<String>) {
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let mut buffer = self.stdout.borrow_mut();
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Recommend(args) => run_recommend_with(args, NOW, &mut *buffer),
            Command::Compatibility(args) => run_compatibility_with(args, NOW, &mut *buffer),
            Command::VerifyAge(args) => run_verify_age_with(args, NOW, &mut *buffer),
            other => panic!("unexpected command {other:?}"),
        });
        self.result.replace(Some(outcome));
    }

    fn error(&self) -> CliError {
        let recorded = self.result.take().expect("result recorded");
        recorded.expect_err("expected failure")
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

#[given("a sample catalog on disk")]
fn sample_catalog_on_disk(#[from(world)] world: &CommandWorld) {
    world.workspace.write_sample_catalog();
}

#[given("I have confirmed my age")]
fn confirmed_age(#[from(world)] world: &CommandWorld) {
    let mut argv = vec![
        "strainwise".to_owned(),
        "verify-age".to_owned(),
        format!("--{ARG_CONFIRM}"),
    ];
    argv.extend([format!("--{ARG_STATE}"), world.workspace.state().into_string()]);
    world.run(argv);
    world
        .result
        .take()
        .expect("result recorded")
        .expect("verification should succeed");
    world.stdout.borrow_mut().clear();
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &CommandWorld) {
    let mut argv = vec!["strainwise".to_owned(), "recommend".to_owned()];
    argv.extend(world.file_args());
    world.run(argv);
}

#[when("I run verify-age without confirming")]
fn run_verify_without_confirming(#[from(world)] world: &CommandWorld) {
    let argv = vec![
        "strainwise".to_owned(),
        "verify-age".to_owned(),
        format!("--{ARG_STATE}"),
        world.workspace.state().into_string(),
    ];
    world.run(argv);
}

#[when("I check compatibility for an unknown item")]
fn check_unknown_item(#[from(world)] world: &CommandWorld) {
    let mut argv = vec![
        "strainwise".to_owned(),
        "compatibility".to_owned(),
        "no-such-strain".to_owned(),
    ];
    argv.extend(world.file_args());
    world.run(argv);
}

#[then("the command fails because the age is not verified")]
fn fails_unverified(#[from(world)] world: &CommandWorld) {
    match world.error() {
        CliError::AgeNotVerified { .. } => {}
        other => panic!("expected AgeNotVerified, found {other:?}"),
    }
}

#[then("the command prints recommendations led by blue-dream")]
fn prints_recommendations(#[from(world)] world: &CommandWorld) {
    world
        .result
        .take()
        .expect("result recorded")
        .expect("expected success");
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let ranked: Vec<Recommendation> =
        serde_json::from_str(&stdout).expect("output should be JSON recommendations");
    assert_eq!(
        ranked.first().map(|item| item.id.as_str()),
        Some("blue-dream")
    );
}

#[then("the command fails because confirmation is required")]
fn fails_unconfirmed(#[from(world)] world: &CommandWorld) {
    match world.error() {
        CliError::ConfirmationRequired => {}
        other => panic!("expected ConfirmationRequired, found {other:?}"),
    }
}

#[then("the command fails because the item is unknown")]
fn fails_unknown_item(#[from(world)] world: &CommandWorld) {
    match world.error() {
        CliError::UnknownItem { id, .. } => assert_eq!(id, "no-such-strain"),
        other => panic!("expected UnknownItem, found {other:?}"),
    }
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/storefront_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(
    recommend_without_confirmation,
    "recommending without an age confirmation"
);
register_command_scenario!(recommend_after_confirmation, "recommending after confirming age");
register_command_scenario!(
    verify_without_flag,
    "confirming age without the confirmation flag"
);
register_command_scenario!(
    compatibility_unknown_item,
    "checking compatibility of an unknown item"
);
