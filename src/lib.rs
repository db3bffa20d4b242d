//! termenu - an in-place terminal menu navigator
//!
//! This library provides a scrollable, highlightable terminal menu with
//! single- and multi-select modes, plus the journal that feeds its status row.

pub mod journal;
pub mod menu;
