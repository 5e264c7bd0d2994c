//! Shared test helpers for `slawatch-core` integration tests.
//!
//! In-memory mocks for the core ports plus a small catalog fixture, so tests
//! can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
