//! # wpd-core
//!
//! Core domain types for the WordPress Plugin Directory advisor.
//!
//! This crate provides the foundational types shared across all advisor
//! crates:
//! - [`PackageRef`] — a dependency reference as seen by the host package
//!   manager, with the WPackagist mirror-namespace predicate and slug
//!   derivation
//! - [`PlatformVersion`] — a two-component WordPress version with the coarse
//!   "releases ahead" bump used by the compatibility check
//! - [`Verdict`] — the result of evaluating one package against the directory

pub mod package;
pub mod verdict;
pub mod version;

pub use package::PackageRef;
pub use verdict::Verdict;
pub use version::{PlatformVersion, VersionError};
