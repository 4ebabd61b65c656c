//! Figma Reporter (figr) Library
//!
//! A small reporting library over the Figma REST API: fetch a file's document
//! tree, walk it for structure, colors, text styles and effects, list
//! published components, and download rendered frame images.
//!
//! # Module Overview
//!
//! - [`credentials`] - Access-token loading from a `KEY=VALUE` env file
//! - [`client`] - Blocking, authenticated API access
//! - [`types`] - Document tree and API response types
//! - [`walk`] - Depth-first traversals and style accumulation
//! - [`color`] - RGBA to hex formatting
//! - [`report`] - Plain-text report rendering
//! - [`export`] - Frame image download batch

pub mod client;
pub mod color;
pub mod credentials;
pub mod error;
pub mod export;
pub mod report;
pub mod types;
pub mod walk;

pub use client::{api_base_from_env, FigmaClient, ImageFormat, DEFAULT_API_BASE, TOKEN_HEADER};
pub use color::rgba_to_hex;
pub use credentials::{load_access_token, TOKEN_KEY};
pub use error::{FigrError, Result};
pub use export::{download_batch, sanitize_filename, BatchSummary};
pub use report::{render_components_report, render_file_report, render_styles_report};
pub use types::{
    Component, ComponentsResponse, FileResponse, ImagesResponse, Node, PublishedStyle,
    StylesResponse,
};
pub use walk::{
    collect_style_usage, find_node_by_id, find_page_for_node, EffectSummary, StyleUsage,
    TextStyleSummary, UNKNOWN_PAGE,
};
