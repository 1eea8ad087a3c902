//! Ragmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by every ragmap crate:
//!
//! - **Identifiers**: String-interned node identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual definitions for node markers and edges ([`draw`] module)
//! - **Catalog**: The node/edge catalog model with lookup-with-default accessors ([`catalog`] module)

pub mod catalog;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
