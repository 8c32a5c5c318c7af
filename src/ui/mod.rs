mod button;

pub use button::Button;

use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Cell edge in pixels at zoom 1.0
pub const CELL_SIZE: f32 = 20.0;
/// Rows/cols added or removed per size button press
pub const RESIZE_STEP: usize = 5;
pub const ZOOM_STEP: f32 = 0.1;

/// Everything the panel and keyboard can ask the engine to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    ToggleRunning,
    Step,
    Reset,
    Randomize,
    RowsDown,
    RowsUp,
    ColsDown,
    ColsUp,
    ZoomOut,
    ZoomIn,
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel layout: full-width buttons stacked on top, then paired +/- rows
pub fn create_buttons(running: bool) -> Vec<(UiAction, Button)> {
    let px = panel_x();
    let half = PANEL_WIDTH / 2.0;
    let run_label = if running { "Stop" } else { "Start" };

    vec![
        (UiAction::ToggleRunning, Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, run_label)),
        (UiAction::Step, Button::new(px, 62.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step")),
        (UiAction::Reset, Button::new(px, 104.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset")),
        (UiAction::Randomize, Button::new(px, 146.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random")),
        (UiAction::RowsDown, Button::new(px, 210.0, half, BUTTON_HEIGHT, "H -")),
        (UiAction::RowsUp, Button::new(px + half, 210.0, half, BUTTON_HEIGHT, "H +")),
        (UiAction::ColsDown, Button::new(px, 270.0, half, BUTTON_HEIGHT, "W -")),
        (UiAction::ColsUp, Button::new(px + half, 270.0, half, BUTTON_HEIGHT, "W +")),
        (UiAction::ZoomOut, Button::new(px, 330.0, half, BUTTON_HEIGHT, "Zoom -")),
        (UiAction::ZoomIn, Button::new(px + half, 330.0, half, BUTTON_HEIGHT, "Zoom +")),
    ]
}
