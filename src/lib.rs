#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
pub mod grid;
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod setup;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::Grid;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use setup::*;
pub use ship::*;
pub use ui::*;
