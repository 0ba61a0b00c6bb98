//! Data providers for querying stream status

pub mod helix;

// Re-export for convenience
pub use helix::HelixDataProvider;
