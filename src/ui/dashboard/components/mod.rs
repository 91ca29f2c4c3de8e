//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod categories;
pub mod error_panel;
pub mod footer;
pub mod header;
pub mod headline;
pub mod loading;
