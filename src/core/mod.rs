//! Core module containing the fundamental traits and types of the layer

pub mod error;
pub mod fields;
pub mod query;
pub mod resource;
pub mod service;

pub use error::{ConfigError, ErrorResponse, QueryError, ResourceError, VitrineError};
pub use fields::{FieldConfig, SerializeConfig};
pub use query::{ListParams, ListResponse, PageMeta};
pub use resource::Resource;
pub use service::ResourceService;
