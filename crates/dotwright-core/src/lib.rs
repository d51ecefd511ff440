//! Dotwright Core Types and Definitions
//!
//! This crate provides the foundational types for building Graphviz DOT
//! documents. It includes:
//!
//! - **Identifiers**: Document-scoped unique identifiers ([`identifier::Id`],
//!   [`identifier::IdRegistry`])
//! - **Sanitizing**: Escaping of free text and identifiers ([`sanitize`] module)
//! - **Geometry**: The point type used by positional attributes ([`geometry::Point`])
//! - **Colors**: X11 color names and explicit RGB(A) values ([`color::Color`])
//! - **Kinds**: The closed enumerations accepted by DOT attributes ([`kinds`] module)
//! - **Attributes**: Typed attribute values and their rendering ([`attribute`] module)
//! - **Attribute sets**: Entity-scoped, typed setter surfaces ([`attribute_set`] module)

pub mod attribute;
pub mod attribute_set;
pub mod color;
pub mod geometry;
pub mod identifier;
pub mod kinds;
pub mod sanitize;
