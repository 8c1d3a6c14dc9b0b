pub mod local;
pub mod memory;
pub mod provider;

pub use local::LocalFsProvider;
pub use memory::MemoryFsProvider;
pub use provider::FsProvider;
