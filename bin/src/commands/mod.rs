//! CLI command implementations.

pub(crate) mod export;
