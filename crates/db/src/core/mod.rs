pub mod definitions;
pub mod errors;
pub mod ops;
