//! Text measurement utilities.
//!
//! - [`visual_width`] - Terminal cell width of a string
//! - [`truncate_to_width`] - Width-aware truncation with a `...` tail
//! - [`pad_to_width`], [`center_in_width`] - Cell-accurate alignment

mod width;

pub use width::{center_in_width, pad_to_width, truncate_to_width, visual_width, TAIL};
