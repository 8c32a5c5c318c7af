use macroquad::prelude::*;

const FONT_SIZE: u16 = 18;

/// Panel button with hover highlight and click detection
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self { x, y, width, height, label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if a screen point lies on the button (edges included)
    pub fn contains(&self, point: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&point.0)
            && (self.y..=self.y + self.height).contains(&point.1)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.contains(mouse_pos) {
            Color::from_rgba(90, 90, 90, 255)
        } else {
            Color::from_rgba(55, 55, 55, 255)
        };

        // 2px gutter so paired buttons don't touch
        let (w, h) = (self.width - 2.0, self.height - 2.0);
        draw_rectangle(self.x, self.y, w, h, fill);
        draw_rectangle_lines(self.x, self.y, w, h, 1.0, GRAY);

        let text = measure_text(&self.label, None, FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            self.x + (w - text.width) / 2.0,
            self.y + (h + text.height) / 2.0,
            FONT_SIZE as f32,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 30.0, "Start");
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 50.0)));
        assert!(button.contains((60.0, 35.0)));
        assert!(!button.contains((9.9, 35.0)));
        assert!(!button.contains((60.0, 50.1)));
        assert_eq!(button.label(), "Start");
    }
}
