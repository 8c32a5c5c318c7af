use macroquad::prelude::*;

use crate::application::{Camera, Engine};
use crate::ui::{Button, UiAction, panel_x, grid_area_width, grid_area_height, CELL_SIZE, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.94, 0.94, 0.94, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const SELECTION_COLOR: Color = Color::new(0.25, 0.6, 1.0, 0.35);
const SELECTION_EDGE: Color = Color::new(0.25, 0.6, 1.0, 0.9);

/// Draw the board, culled to the visible area
pub fn draw_grid(engine: &Engine, camera: &Camera) {
    let zoom = engine.zoom();
    let size = CELL_SIZE * zoom;
    let (rows, cols) = engine.dimensions();
    let (area_w, area_h) = (grid_area_width(), grid_area_height());

    let (min_row, min_col) = camera.screen_to_cell(0.0, 0.0, CELL_SIZE, zoom);
    let (max_row, max_col) = camera.screen_to_cell(area_w, area_h, CELL_SIZE, zoom);
    let row_range = min_row.max(0) as usize..((max_row + 1).max(0) as usize).min(rows);
    let col_range = min_col.max(0) as usize..((max_col + 1).max(0) as usize).min(cols);

    let grid = engine.grid();
    for row in row_range {
        for col in col_range.clone() {
            let (x, y) = camera.cell_to_screen(row, col, CELL_SIZE, zoom);
            if grid.get(row, col).is_some_and(|cell| cell.is_alive()) {
                draw_rectangle(x, y, size, size, ALIVE_COLOR);
            }
            draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
        }
    }

    if let Some(rect) = engine.selection() {
        let (x, y) = camera.cell_to_screen(rect.top(), rect.left(), CELL_SIZE, zoom);
        let (w, h) = (rect.width() as f32 * size, rect.height() as f32 * size);
        draw_rectangle(x, y, w, h, SELECTION_COLOR);
        draw_rectangle_lines(x, y, w, h, 2.0, SELECTION_EDGE);
    }
}

/// Draw the side panel: buttons, status, and help
pub fn draw_controls(engine: &Engine, buttons: &[(UiAction, Button)], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|(_, button)| button.draw(mouse_pos));

    let (rows, cols) = engine.dimensions();
    let (status, status_color) = if engine.is_running() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Stopped", Color::from_rgba(255, 165, 0, 255))
    };

    let labels = [
        (format!("H: {rows}"), 202.0, 14.0, WHITE),
        (format!("W: {cols}"), 262.0, 14.0, WHITE),
        (format!("Zoom: {:.1}x", engine.zoom()), 322.0, 14.0, WHITE),
        (format!("Rule: {}", engine.rule_name()), 395.0, 14.0, GRAY),
        (format!("Generation: {}", engine.generation()), 415.0, 16.0, WHITE),
        (format!("Alive: {}", engine.grid().live_count()), 435.0, 14.0, GRAY),
        (format!("Every {} ms", engine.cadence().as_millis()), 455.0, 14.0, GRAY),
        (status.to_string(), 480.0, 18.0, status_color),
    ];
    for (text, y, size, color) in &labels {
        draw_text(text, px + 4.0, *y, *size, *color);
    }

    let help = [
        "Controls:",
        "LMB: Toggle / paint",
        "RMB drag: Toggle area",
        "MMB drag: Pan",
        "Wheel, +/-: Zoom",
        "Space: Start/Stop",
        "N: Step  C: Reset",
        "R: Random  H: Home",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, px + 4.0, 520.0 + i as f32 * 14.0, 12.0, GRAY);
    }
}
