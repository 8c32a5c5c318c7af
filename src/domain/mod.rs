mod cell;
mod grid;
mod rules;
mod selection;

pub use cell::Cell;
pub use grid::{Grid, DEFAULT_MAX_DIMENSION};
pub use rules::{Rule, ConwayRule};
pub use selection::{Rect, Selection, SelectionEditor};
