//! Proximity menu overlay state.

use kurbo::{Line, Size};

/// Overlay menu whose visibility suppresses drawing input.
///
/// The menu carries its crosshair guide geometry; layout and hit-testing of
/// the menu contents belong to the surrounding application.
#[derive(Debug, Clone)]
pub struct ProximityMenu {
    visible: bool,
    horizontal_guide: Line,
    vertical_guide: Line,
}

impl ProximityMenu {
    /// Build the menu for a canvas size; starts hidden.
    pub fn new(canvas: Size) -> Self {
        let (horizontal_guide, vertical_guide) = Self::guides_for(canvas);
        Self {
            visible: false,
            horizontal_guide,
            vertical_guide,
        }
    }

    fn guides_for(canvas: Size) -> (Line, Line) {
        let horizontal = Line::new(
            (0.0, canvas.height * 0.5),
            (canvas.width, canvas.height * 0.5),
        );
        let vertical = Line::new((canvas.width * 0.5, canvas.height), (canvas.width * 0.5, 0.0));
        (horizontal, vertical)
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Crosshair guide lines splitting the canvas into quadrants.
    pub fn guides(&self) -> (Line, Line) {
        (self.horizontal_guide, self.vertical_guide)
    }

    /// Rebuild the guides after a canvas resize.
    pub fn resize(&mut self, canvas: Size) {
        let (horizontal, vertical) = Self::guides_for(canvas);
        self.horizontal_guide = horizontal;
        self.vertical_guide = vertical;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_and_toggles() {
        let mut menu = ProximityMenu::new(Size::new(800.0, 600.0));
        assert!(!menu.is_visible());

        menu.toggle_visibility();
        assert!(menu.is_visible());
        menu.toggle_visibility();
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut menu = ProximityMenu::new(Size::new(800.0, 600.0));
        menu.toggle_visibility();
        menu.hide();
        menu.hide();
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_guides_cross_at_canvas_center() {
        let menu = ProximityMenu::new(Size::new(800.0, 600.0));
        let (horizontal, vertical) = menu.guides();
        assert!((horizontal.p0.y - 300.0).abs() < f64::EPSILON);
        assert!((horizontal.p1.x - 800.0).abs() < f64::EPSILON);
        assert!((vertical.p0.x - 400.0).abs() < f64::EPSILON);
    }
}
