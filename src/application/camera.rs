/// Camera holds the drag-to-pan offset of the board on screen.
/// Zoom lives in the engine; every conversion takes it as an argument.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert a screen position to (row, col); may be negative or past the grid
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32, zoom: f32) -> (i32, i32) {
        let size = cell_size * zoom;
        let col = ((screen_x - self.offset_x) / size).floor() as i32;
        let row = ((screen_y - self.offset_y) / size).floor() as i32;
        (row, col)
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_to_screen(&self, row: usize, col: usize, cell_size: f32, zoom: f32) -> (f32, f32) {
        let size = cell_size * zoom;
        (col as f32 * size + self.offset_x, row as f32 * size + self.offset_y)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_with_pan_and_zoom() {
        let mut camera = Camera::new();
        assert_eq!(camera.screen_to_cell(25.0, 45.0, 20.0, 1.0), (2, 1));
        assert_eq!(camera.screen_to_cell(25.0, 45.0, 20.0, 2.0), (1, 0));

        camera.pan(100.0, 0.0);
        assert_eq!(camera.screen_to_cell(25.0, 45.0, 20.0, 1.0), (2, -4));
    }

    #[test]
    fn test_round_trip_cell_corner() {
        let mut camera = Camera::new();
        camera.pan(-13.0, 7.0);
        let (x, y) = camera.cell_to_screen(4, 9, 20.0, 1.5);
        assert_eq!(camera.screen_to_cell(x + 1.0, y + 1.0, 20.0, 1.5), (4, 9));
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new();
        camera.pan(3.0, 4.0);
        camera.reset();
        assert_eq!(camera, Camera::default());
    }
}
