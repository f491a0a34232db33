//! Shared primitives and traits for the codonic sequence toolkit.
//!
//! `codonic-core` provides the foundation the other codonic crates build on:
//!
//! - **Error types**: [`CodonicError`] and [`Result`] for structured error handling
//! - **Traits**: core abstractions like [`Sequence`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{CodonicError, Result};
pub use traits::*;
