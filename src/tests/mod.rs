//! Test module for the registry crate.
//!
//! - Integration tests (full registry + dispatcher end-to-end)
//! - Fuzz tests (dispatch never panics on arbitrary method strings)

pub mod fuzz;
pub mod integration;
