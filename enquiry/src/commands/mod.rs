pub mod fill;
pub mod submit;
