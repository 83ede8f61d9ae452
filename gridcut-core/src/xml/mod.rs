//! Minimal owned XML document tree over quick-xml.
//!
//! The grid generator must preserve arbitrary unknown content of the input
//! project, so the event stream is materialized into a tree, mutated in
//! place, and serialized back out.

pub mod read;
pub mod tree;
pub mod write;
