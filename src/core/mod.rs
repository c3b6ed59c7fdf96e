pub mod emitter;
pub mod etl;
pub mod header;
pub mod parser;

pub use crate::domain::model::{
    BuildReport, GeneratedFile, HeaderMetadata, ListInfo, MetadataKey, OutputTargets,
    ServiceGroup, SourceDocument,
};
pub use crate::domain::ports::{ConfigProvider, ListFormat, Storage};
pub use crate::utils::error::Result;
