//! # Landing
//!
//! Presentational layer over the catalog: Dioxus components plus the SSR entry points
//! the server uses to turn them into full HTML documents.
//!
//! Views only read the [`Registry`](iet_catalog::Registry); they never validate it.
//! A malformed registry is a data defect caught by the catalog's own tests.

mod card;
mod components;
mod render;

pub use crate::card::{SectionCardModel, VISIBLE_TOOLS};
pub use crate::components::*;
pub use crate::render::{render_landing, render_not_found, render_tool};
