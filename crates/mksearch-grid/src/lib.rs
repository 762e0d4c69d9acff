//! Grid maps as search domains.

mod grid;

pub mod four_connected;

pub use self::four_connected::{manhattan_distance, Direction, FourConnected};
pub use self::grid::*;
