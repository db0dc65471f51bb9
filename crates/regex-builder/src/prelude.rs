//! Convenient re-exports for common regex-builder usage.
//!
//! # Example
//!
//! ```
//! use regex_builder::prelude::*;
//!
//! let mut builder = PatternBuilder::new();
//! builder.symbols("sp3@k").capture()?;
//! assert_eq!(builder.find("1337 sp3@k")?, Some("sp3@k".to_string()));
//! # Ok::<(), PatternError>(())
//! ```

// Builder
pub use crate::builder::{PatternBuilder, SubPattern, Word, build};

// Error handling
pub use crate::error::{PatternError, Result};

// Matching
pub use crate::engine::{Captures, Engine, Match};

// Configuration
pub use crate::config::EngineConfig;

// Fixed tokens
pub use crate::token;
