//! Shared test harness modules for the etchant CLI.

use super::*;

mod commands;
mod helpers;
mod unit;
