pub mod error;
pub mod local;
pub mod memory;
pub mod provider;

/// Re-export key types
pub use error::StorageSystemError;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
pub use provider::StorageProvider;
