//! Domain types - pure values independent of how git is reached

pub mod entry;
pub mod reference;

pub use entry::CommitEntry;
pub use reference::Reference;
