//! Serialization of the document tree into DOT text.

pub(crate) mod dot;
