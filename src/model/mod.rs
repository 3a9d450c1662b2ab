//! ADF document model.
//!
//! This module defines the node/mark/attribute shapes the converter
//! accepts. It carries no behavior beyond small accessors; rendering lives
//! in [`crate::render`].

mod node;

pub use node::*;
