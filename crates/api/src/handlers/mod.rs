pub mod content;
pub mod files;
pub mod gallery;
pub mod generation;
pub mod payments;
