//! Wayfarer Core - Shared types library.
//!
//! This crate provides the common building blocks used across the Wayfarer
//! components:
//! - `api` - REST backend serving tours, users, and AI tour suggestions
//! - `integration-tests` - End-to-end HTTP tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure data structures - no I/O, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and email addresses
//! - [`store`] - Generic in-memory entity store with auto-incrementing IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod types;

pub use store::{Entity, EntityStore, StoreError};
pub use types::*;
