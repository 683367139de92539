//! MCP tool surface for the web-dev reference catalog.

pub(crate) mod descriptors;
mod router;
pub mod schemas;
mod service;

pub use service::WebDevReferenceService;
