//! # Navigation
//!
//! - [`Navigator`]: Port for the current entry's query parameters
//! - [`InMemoryNavigator`]: History kept in memory

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryNavigator;
pub use traits::Navigator;
