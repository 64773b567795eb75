//! Content record model and storage abstraction for menugen.
//!
//! This crate provides a [`Storage`] trait for loading the flat collection of
//! content pages that menus are generated from. This enables:
//!
//! - **Unit testing** of menu generation without touching the filesystem
//! - **Backend flexibility** (filesystem, in-memory, generated pages)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Document`]: a content page with typed [`MenuMeta`] and free-form front matter
//! - [`Storage`] trait with a single `scan()` method
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! The filesystem backend lives in `menugen-storage-fs`.

#[cfg(feature = "mock")]
mod mock;
mod storage;

#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Document, MenuMeta, Storage, StorageError, StorageErrorKind};
