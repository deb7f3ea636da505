pub mod encoder;
pub mod font;
pub mod resource;

pub use encoder::{EncodeError, RasterEncoder};
pub use font::{FontStore, InMemoryFontStore};
pub use resource::{AssetSink, InMemoryAssetSink, ResourceError, SharedResourceData};
