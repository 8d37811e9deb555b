//! Shared test harness modules for the Pinpoint CLI.
#![expect(
    clippy::expect_used,
    clippy::panic,
    reason = "tests fail fast and assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod unit;
