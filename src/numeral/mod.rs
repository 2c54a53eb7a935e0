//! Digit-count estimation and positional encoding of frame indices.

pub mod scheme;
