//! Domain catalog for the Renove-se provisioner.
//!
//! Holds the enumerated value sets enforced by the database schema, the
//! validation helpers shared with the DB layer, and the fixed seed catalog
//! (transformation modules, content templates, generated section bodies).
//! This crate has no database dependency.

pub mod catalog;
pub mod seed;
