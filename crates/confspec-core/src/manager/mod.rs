//! # Configuration Manager
//!
//! The [`Manager`] owns a set of [`ConfigOption`](crate::option::ConfigOption)s,
//! grouped by category, and a stack of configuration files. Files are read
//! in order with the last one acting as the user file: it is the only file
//! [`Manager::save`] writes, either explicitly or through writeback after
//! every committed change.
//!
//! Faults raised while loading, saving or notifying listeners are returned
//! when safe mode is off. With safe mode on they are handed to the error
//! sink and the operation continues with the next file, key or listener.
pub mod accessors;
pub mod builder;
pub mod config_manager;
pub mod listener;

pub use builder::ManagerBuilder;
pub use config_manager::Manager;
pub use listener::{Listener, ListenerResult, listener};

// Test module declaration
#[cfg(test)]
mod tests;
