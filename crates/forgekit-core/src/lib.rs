//! Core traits, types, and error handling for forgekit.
//!
//! This crate provides the foundational abstractions shared by every
//! Git hosting backend: the [`Provider`] trait, its option types, and the
//! common [`Error`] type.

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use error::{Error, Result};
pub use provider::Provider;
pub use types::{Auth, CreateRepoOptions, ProviderOptions, ProviderType};
