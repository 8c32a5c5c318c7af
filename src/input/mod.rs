use macroquad::prelude::*;
use tracing::debug;

use crate::application::{Camera, Engine};
use crate::domain::Cell;
use crate::ui::{grid_area_width, Button, UiAction, CELL_SIZE, RESIZE_STEP, ZOOM_STEP};

/// Run one panel/keyboard action against the engine.
/// Refused edits are logged and otherwise ignored.
pub fn apply_action(engine: &mut Engine, action: UiAction) {
    let (rows, cols) = engine.dimensions();
    let result = match action {
        UiAction::ToggleRunning => {
            engine.toggle_running();
            Ok(())
        }
        UiAction::Step => engine.step_once(),
        UiAction::Reset => {
            engine.reset();
            Ok(())
        }
        UiAction::Randomize => engine.randomize(),
        UiAction::RowsDown => {
            engine.resize(rows.saturating_sub(RESIZE_STEP), cols);
            Ok(())
        }
        UiAction::RowsUp => {
            engine.resize(rows + RESIZE_STEP, cols);
            Ok(())
        }
        UiAction::ColsDown => {
            engine.resize(rows, cols.saturating_sub(RESIZE_STEP));
            Ok(())
        }
        UiAction::ColsUp => {
            engine.resize(rows, cols + RESIZE_STEP);
            Ok(())
        }
        UiAction::ZoomOut => {
            engine.set_zoom(engine.zoom() - ZOOM_STEP);
            Ok(())
        }
        UiAction::ZoomIn => {
            engine.set_zoom(engine.zoom() + ZOOM_STEP);
            Ok(())
        }
    };

    if let Err(err) = result {
        debug!(?action, %err, "action ignored");
    }
}

/// Map a screen position to an in-bounds cell of the engine's grid
pub fn cell_under(engine: &Engine, camera: &Camera, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if mouse_pos.0 >= grid_area_width() {
        return None;
    }
    let (row, col) = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE, engine.zoom());
    let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
    engine.grid().contains(row, col).then_some((row, col))
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(engine: &mut Engine) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        apply_action(engine, UiAction::ZoomIn);
    } else if wheel < 0.0 {
        apply_action(engine, UiAction::ZoomOut);
    }
}

/// Gesture state carried between frames:
/// left = click toggle then drag paint, right = rectangle selection, middle = pan.
#[derive(Default)]
pub struct PointerState {
    paint: Option<(Cell, (usize, usize))>,
    last_pan: Option<(f32, f32)>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, engine: &mut Engine, camera: &mut Camera, mouse_pos: (f32, f32)) {
        self.handle_pan(camera, mouse_pos);
        let cell = cell_under(engine, camera, mouse_pos);

        if is_mouse_button_pressed(MouseButton::Left) {
            self.paint = None;
            if let Some((row, col)) = cell {
                match engine.toggle_cell(row, col) {
                    Ok(()) => {
                        let value = engine.grid().get(row, col).unwrap_or_default();
                        self.paint = Some((value, (row, col)));
                    }
                    Err(err) => debug!(%err, "click ignored"),
                }
            }
        } else if is_mouse_button_down(MouseButton::Left) {
            if let (Some((value, last)), Some(here)) = (self.paint, cell) {
                if here != last && engine.paint_cell(here.0, here.1, value).is_ok() {
                    self.paint = Some((value, here));
                }
            }
        } else {
            self.paint = None;
        }

        if is_mouse_button_pressed(MouseButton::Right) {
            if let Some((row, col)) = cell {
                if let Err(err) = engine.begin_selection(row, col) {
                    debug!(%err, "selection not started");
                }
            }
        } else if is_mouse_button_down(MouseButton::Right) {
            if let Some((row, col)) = cell {
                engine.extend_selection(row, col);
            }
        }
        if is_mouse_button_released(MouseButton::Right) {
            if let Err(err) = engine.commit_selection() {
                debug!(%err, "selection discarded");
            }
        }
    }

    fn handle_pan(&mut self, camera: &mut Camera, mouse_pos: (f32, f32)) {
        if !is_mouse_button_down(MouseButton::Middle) {
            self.last_pan = None;
            return;
        }
        if let Some(last) = self.last_pan {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        self.last_pan = Some(mouse_pos);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(engine: &mut Engine, camera: &mut Camera) {
    const BINDINGS: [(KeyCode, UiAction); 6] = [
        (KeyCode::Space, UiAction::ToggleRunning),
        (KeyCode::N, UiAction::Step),
        (KeyCode::C, UiAction::Reset),
        (KeyCode::R, UiAction::Randomize),
        (KeyCode::Equal, UiAction::ZoomIn),
        (KeyCode::Minus, UiAction::ZoomOut),
    ];

    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| apply_action(engine, *action));

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Process panel button clicks
pub fn process_button_clicks(engine: &mut Engine, buttons: &[(UiAction, Button)], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|(_, button)| button.is_clicked(mouse_pos))
        .for_each(|(action, _)| apply_action(engine, *action));
}
