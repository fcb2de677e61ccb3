#![cfg(test)]

pub mod common;
pub mod person_tests;
pub mod scenario_tests;
