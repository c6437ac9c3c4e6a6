//! Ready-made boards.
//!
//! Both are plain data for the same engine:
//! - [`classic`]: the standard 40-space ring
//! - [`ladder`]: a 10-tile linear demo with one ladder

pub mod classic;
pub mod ladder;
