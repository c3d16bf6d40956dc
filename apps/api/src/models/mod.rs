pub mod ops;
pub mod resume;
pub mod sample;
