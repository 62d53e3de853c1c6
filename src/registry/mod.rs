pub mod source_loader;

pub use source_loader::{SourceConfig, SourceRegistry};
