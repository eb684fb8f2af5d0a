//! Projects compiled GraphQL operations and fragments into the set of
//! structural type declarations that describe every shape their responses
//! can take.
//!
//! Inputs are [`operation::Operation`]s and [`operation::Fragment`]s whose
//! selection sets already carry the concrete types each position can resolve
//! to. The [`projection::ProjectionEngine`] splits each selection set into its
//! [`projection::Variant`]s, merges the fields selected for each variant, and
//! names one [`projection::Declaration`] per shape (plus a union per
//! polymorphic position) after its [`projection::ScopePath`].

pub mod operation;
pub mod projection;
pub mod types;

pub use projection::ProjectionConfig;
pub use projection::ProjectionEngine;
