#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
mod error;
pub use error::*;

mod position;
pub use position::*;

pub mod limits;

mod map_block;
pub use map_block::*;

pub mod format;
pub use format::{HEADER_SIZE, VERSION};
