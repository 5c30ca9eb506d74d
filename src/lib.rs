pub mod interpolation;
pub mod profile;
pub mod sampling;
