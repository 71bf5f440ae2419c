pub mod postgres;
pub mod seed;
