//! Repository Layer
//!
//! Data access for the development backend.

mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryCatalog;
pub use traits::Catalog;
