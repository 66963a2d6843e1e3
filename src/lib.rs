#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Access flags (modifiers) of JVM classes, fields and methods.
//!
//! [`AccessFlags`] holds the raw `u16` stored in a class file and exposes a predicate and a
//! setter for each flag of the catalog, e.g., [`AccessFlags::is_public`] and
//! [`AccessFlags::set_public`].
//! ```
//! use classflags::AccessFlags;
//!
//! let mut flags = AccessFlags::empty();
//! flags.set_public(true);
//! flags.set_static(true);
//! assert_eq!(flags.bits(), 0x0009);
//! ```
//! Checking whether a combination of flags is legal for a class, a field or a method is
//! left to the caller.
//! ## Features
#![doc = document_features::document_features!()]

pub mod errors;
mod flags;
pub(crate) mod macros;
#[cfg(feature = "modifier-keywords")]
#[cfg_attr(docsrs, doc(cfg(feature = "modifier-keywords")))]
pub mod modifiers;

pub use flags::{AccessFlags, Flag};

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
