//! Shared utilities for value decoding

pub mod string_utils;

pub use string_utils::*;
