//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O and no heavy logic, just data and simple helpers.

pub mod config;
pub mod error;
pub mod icon;
pub mod nav;

pub use icon::Icon;
pub use nav::{NavItem, NavSection};
