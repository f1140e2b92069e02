//! End-to-end ranking tests.

mod common;

#[path = "ranking/scenarios.rs"]
mod scenarios;

#[path = "ranking/validation.rs"]
mod validation;

#[path = "ranking/weights.rs"]
mod weights;
