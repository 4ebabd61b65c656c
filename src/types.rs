//! Data types used throughout the figr library.
//!
//! This module is organized by domain:
//! - [`node`] - Document tree types returned inside a file response
//! - [`api`] - Envelopes of the Figma REST endpoints

pub mod api;
pub mod node;

// Re-export the common types at module level for convenience
pub use api::{
    Component, ComponentCollection, ComponentsResponse, ContainingFrame, FileResponse,
    ImagesResponse, PublishedStyle, StyleCollection, StylesResponse,
};
pub use node::{Effect, EffectOffset, Node, Paint, Rgba, TypeStyle};
