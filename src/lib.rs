//! In-memory configuration model and reflective editor for a medical-imaging
//! simulation setup.
//!
//! Build a typed configuration tree (scanner geometry, physics, digitizer
//! chain, particle source, data output, acquisition), walk it generically
//! through its declared metadata, and edit it without knowing any concrete
//! type: render forms, pick tagged-union variants, grow bounded lists, and
//! save/load JSON documents.
//!
//! Design goals:
//! - Declarations are data: one static descriptor table per kind, everything
//!   else walks it.
//! - Last-writer-wins variant selection; choosing constructs a fresh default
//!   instance and never touches siblings.
//! - Unknown field and variant names degrade silently to absence; the model
//!   layer has no panics and no exceptions.
pub mod meta;
pub mod node;
pub mod doc;
pub mod edit;
pub mod render;
pub mod schema;
pub mod cli;
