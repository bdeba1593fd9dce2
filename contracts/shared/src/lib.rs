#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod types;

pub use constants::{MAX_APPROVAL_THRESHOLD, MIN_APPROVAL_THRESHOLD};
