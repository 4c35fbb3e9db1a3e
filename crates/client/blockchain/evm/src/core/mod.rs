//! Provider errors and their translation into the core taxonomy.

pub mod error;

pub use error::{ProviderError, codes};
