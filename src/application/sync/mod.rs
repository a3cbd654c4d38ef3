//! Local/remote transaction synchronizer

pub mod store;
pub mod synchronizer;

pub use store::SyncStore;
pub use synchronizer::Synchronizer;
