//! regex-builder: Fluent regular-expression pattern builder
//!
//! This crate assembles a regular-expression pattern string from an ordered sequence
//! of semantic fragments (literal text, character classes, quantifiers, groups and
//! lookaround assertions) and hands the finished pattern to [`fancy-regex`] for
//! matching and replacing.
//!
//! # Features
//!
//! - **Fluent producers** that append one fragment each and return the builder
//! - **Rewriters** that turn earlier fragments into captures or optional groups
//! - **Nested composition** through [`SubPattern`], evaluated against a fresh builder
//! - **Look-behind / look-ahead** support via the `fancy-regex` engine
//! - **Compiled-pattern cache** shared by every builder through [`GLOBAL_ENGINE`]
//!
//! # Example
//!
//! ```
//! use regex_builder::PatternBuilder;
//!
//! let mut builder = PatternBuilder::new();
//! builder.word("consequat").optional_symbols("qu");
//!
//! assert_eq!(builder.to_string(), "conse(?:qu)?at");
//! assert_eq!(
//!     builder.find_all("consequat conseat").unwrap(),
//!     vec!["consequat", "conseat"],
//! );
//! ```
//!
//! [`fancy-regex`]: https://docs.rs/fancy-regex

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod escape;
pub mod prelude;
pub mod token;

pub use builder::{PatternBuilder, SubPattern, Word, build};
pub use config::{ConfigFormat, EngineConfig, EnvConfig};
pub use engine::{CacheStats, Captures, Engine, GLOBAL_ENGINE, Match, PatternCache};
pub use error::{PatternError, Result};
pub use escape::{escape_class, escape_literal};
