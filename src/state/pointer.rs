// Pointer/touch tracking for the garden canvas.

use web_sys::HtmlCanvasElement;
use yew_garden::{FieldBounds, Point};

#[derive(Default, Debug, Clone)]
pub struct PointerState {
    pub mouse_down: bool,
    pub touch_active: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl PointerState {
    pub fn press(&mut self, p: Point, touch: bool) {
        self.mouse_down = !touch;
        self.touch_active = touch;
        self.last_x = p.x;
        self.last_y = p.y;
    }

    pub fn track(&mut self, p: Point) {
        self.last_x = p.x;
        self.last_y = p.y;
    }

    pub fn is_down(&self) -> bool {
        self.mouse_down || self.touch_active
    }

    pub fn release(&mut self) {
        self.mouse_down = false;
        self.touch_active = false;
    }
}

/// Maps client coordinates into the field's logical space, compensating for
/// the canvas being scaled by CSS.
pub fn to_logical(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64, bounds: FieldBounds) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let sx = if rect.width() > 0.0 { bounds.width / rect.width() } else { 1.0 };
    let sy = if rect.height() > 0.0 { bounds.height / rect.height() } else { 1.0 };
    Point::new((client_x - rect.left()) * sx, (client_y - rect.top()) * sy)
}
