//! xmigraph Core Types
//!
//! This crate provides the foundational types shared by the xmigraph crates:
//!
//! - **Identifiers**: Interned document-local identifiers ([`identifier::Id`])
//! - **Model**: The resolved component/interface graph ([`model`] module)

pub mod identifier;
pub mod model;
