/// Repository layout adapters
mod maven2_layout;

pub use maven2_layout::{Maven2LayoutProvider, Maven2RepositoryLayout, MAVEN2_LAYOUT_ID};
