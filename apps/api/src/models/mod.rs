pub mod demo;
pub mod resume;
