pub mod entropy;
pub mod generator;
