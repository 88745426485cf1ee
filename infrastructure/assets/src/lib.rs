pub mod bundled;
pub mod file;
pub mod memory;

pub use bundled::BundledAssetProvider;
pub use file::FileAssetProvider;
pub use memory::InMemoryAssetProvider;
