//! Domain logic for the nanoedit backend.
//!
//! Pure, I/O-free building blocks: prompt validation and categorization,
//! the generation status model, static content and gallery catalogs, the
//! subscription package table, and upload filename helpers. HTTP and
//! persistence concerns live in `nanoedit-api` and `nanoedit-store`.

pub mod content;
pub mod error;
pub mod files;
pub mod gallery;
pub mod generation;
pub mod pagination;
pub mod payments;
