//! Stores for designer state
//!
//! The selection store is the only writable state of the page. The theme
//! catalog is read-only and shared through context.

pub mod selection;
pub mod themes;

pub use selection::*;
pub use themes::*;
