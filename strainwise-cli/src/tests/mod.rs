//! Shared test harness modules for the Strainwise CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod command_steps;
mod config_unit;
mod helpers;
