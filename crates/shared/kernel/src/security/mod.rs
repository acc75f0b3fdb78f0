//! Input validation for values arriving from outside the process.

pub mod boundary;
