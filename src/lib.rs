pub mod errors;
pub mod field_generals;

pub mod matrix_store;

pub mod dense_store;

pub mod cramer;
