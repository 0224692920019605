//! UI Components for the landing panel.
//!
//! # Layout Components
//! - [`Landing`] - Root: host wiring and layout
//! - [`Nav`] - Navigation bar (studio sections)
//! - [`StudioVisual`] - Pipeline card and feature grid (studio sections)
//! - [`Timeline`] - Workflow ribbon (studio sections)
//!
//! # Contract Components
//! - [`HeroCard`] - Host props, call-to-action and confirmation

mod hero;
mod landing;
mod nav;
mod timeline;
mod visual;

pub use hero::*;
pub use landing::*;
pub use nav::*;
pub use timeline::*;
pub use visual::*;
