//! Resolved structural model types.
//!
//! These types are the output of parsing and resolution: every relationship
//! has been checked against the declared entities, so lookups from an edge to
//! its endpoint never fail.
//!
//! # Pipeline Position
//!
//! ```text
//! Document Text
//!     ↓ trim + lexer
//! Tokens
//!     ↓ structural parser
//! Provisional entities + relationship records
//!     ↓ resolver (ModelBuilder)
//! Model (these types)
//! ```
//!
//! # Organization
//!
//! - [`element`] - Entity types: [`Operation`], [`Interface`], [`Component`]
//! - [`aggregate`] - The finished [`Model`]
//! - [`builder`] - [`ModelBuilder`] and [`LinkError`]

pub mod aggregate;
pub mod builder;
pub mod element;

pub use aggregate::*;
pub use builder::*;
pub use element::*;
