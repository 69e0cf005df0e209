/// Descriptor source adapters
mod caching_descriptor_reader;
mod descriptor_catalog;

pub use caching_descriptor_reader::CachingDescriptorReader;
pub use descriptor_catalog::{DescriptorCatalog, CATALOG_FILE_NAME};
