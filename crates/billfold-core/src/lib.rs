// SPDX-License-Identifier: MIT
//
// billfold-core — Domain types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::PageRegion;
pub use error::BillfoldError;
pub use types::*;
