//! Test utilities.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository and email sender implementations
//! - A builder for constructing `AppState` with test dependencies

mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
