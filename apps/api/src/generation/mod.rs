// Problem generation engine.
// Implements: arithmetic core, long-division stepper, constrained generators, drills.
// Everything below handlers is synchronous and takes its randomness as a parameter.

pub mod arithmetic;
pub mod config;
pub mod drills;
pub mod generator;
pub mod handlers;
pub mod long_division;
pub mod practice;
pub mod random;
