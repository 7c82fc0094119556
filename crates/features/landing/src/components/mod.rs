//! View components

mod cards;
mod landing;
mod nav;
mod tool;

pub use cards::{AboutCard, IconGlyph, SectionCard};
pub use landing::LandingPage;
pub use nav::Sidebar;
pub use tool::{NotFoundPage, ToolPage};
