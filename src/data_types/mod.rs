pub mod color;
pub mod config;
pub mod dimension;
pub mod value;

// Re-export everything for compatibility
pub use color::*;
pub use config::*;
pub use dimension::*;
pub use value::*;
