pub mod generation;
pub mod transaction;
