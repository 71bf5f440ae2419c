#![allow(dead_code, unused_imports)]

pub mod memory_repos;
pub mod test_utils;

pub use test_utils::*;
