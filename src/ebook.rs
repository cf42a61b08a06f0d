//! Publication model and its supporting modules.
//!
//! ## Publication
//! - [`epub`]: The [`Epub`](epub::Epub) aggregate and its package, sections, and TOC.
//!
//! ## Supporting Components
//! - [`errors`]: Error types.
//! - [`resource`]: Registered stylesheets, fonts, images, and videos.
//! - [`fetch`]: Retrieval of resource content.
//! - [`staging`]: Filesystem backends used while writing.
//! - [`datetime`]: UTC timestamps.

pub mod datetime;
pub mod epub;
pub mod errors;
pub mod fetch;
pub mod resource;
pub mod staging;
