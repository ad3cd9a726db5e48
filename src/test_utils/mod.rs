//! Test utilities.
//!
//! This module provides:
//! - Record factories with sensible defaults
//! - Port doubles that record what the code under test did

mod factories;
mod port_mocks;

pub use factories::*;
pub use port_mocks::*;
