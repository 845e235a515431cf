#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

#[cfg(target_arch = "arm")]
pub mod board;
mod button;
pub use button::*;
mod controller;
pub use controller::*;
mod phase;
pub use phase::*;
mod signal;
pub use signal::*;

#[cfg(test)]
mod mock;
