//! Shared collection aliases.

pub mod collections;
