//! Finger-paint strokes laid over the lawn.

use serde::{Deserialize, Serialize};

use crate::model::Point;

pub const RAINBOW: [&str; 7] = [
    "#FF0000", "#FF7F00", "#FFFF00", "#00FF00", "#0000FF", "#4B0082", "#9400D3",
];

pub const PAINT_COLORS: [&str; 8] = [
    "#FF4444", "#FF9800", "#FFEB3B", "#4CAF50", "#2196F3", "#9C27B0", "#FF69B4", "#FFFFFF",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    pub fn width(self) -> f64 {
        match self {
            BrushSize::Small => 5.0,
            BrushSize::Medium => 10.0,
            BrushSize::Large => 20.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StrokeStyle {
    Solid(String),
    /// Cycles through [`RAINBOW`] along the stroke.
    Rainbow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintStroke {
    pub id: u64,
    pub points: Vec<Point>,
    pub style: StrokeStyle,
    pub width: f64,
}

impl PaintStroke {
    /// Colour of the segment ending at point `index`.
    pub fn color_at(&self, index: usize) -> &str {
        match &self.style {
            StrokeStyle::Solid(c) => c,
            StrokeStyle::Rainbow => RAINBOW[index % RAINBOW.len()],
        }
    }

    pub fn touches(&self, point: Point, radius: f64) -> bool {
        self.points.iter().any(|p| p.distance(point) <= radius)
    }
}

/// Gaps are never split finer than this.
const MIN_SMOOTHING: f64 = 1.0;
const DEFAULT_SMOOTHING: f64 = 8.0;

#[derive(Clone, Debug)]
pub struct PaintCanvas {
    smoothing: f64,
    strokes: Vec<PaintStroke>,
    active: Option<PaintStroke>,
    next_id: u64,
}

impl PaintCanvas {
    pub fn new(smoothing: f64) -> Self {
        Self {
            smoothing: if smoothing.is_finite() { smoothing.max(MIN_SMOOTHING) } else { DEFAULT_SMOOTHING },
            strokes: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    pub fn strokes(&self) -> &[PaintStroke] {
        &self.strokes
    }

    pub fn active(&self) -> Option<&PaintStroke> {
        self.active.as_ref()
    }

    /// Finished strokes followed by the one being drawn.
    pub fn iter(&self) -> impl Iterator<Item = &PaintStroke> {
        self.strokes.iter().chain(self.active.iter())
    }

    pub fn begin(&mut self, point: Point, style: StrokeStyle, width: f64) {
        if let Some(open) = self.active.take() {
            self.strokes.push(open);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.active = Some(PaintStroke {
            id,
            points: vec![point],
            style,
            width,
        });
    }

    /// Appends `point`, filling gaps wider than the smoothing threshold.
    /// Returns false when no stroke is open.
    pub fn extend(&mut self, point: Point) -> bool {
        let Some(stroke) = self.active.as_mut() else {
            return false;
        };
        let Some(&last) = stroke.points.last() else {
            stroke.points.push(point);
            return true;
        };
        let gap = last.distance(point);
        if gap > self.smoothing {
            let steps = (gap / self.smoothing).ceil() as usize;
            for i in 1..steps {
                stroke.points.push(last.lerp(point, i as f64 / steps as f64));
            }
        }
        stroke.points.push(point);
        true
    }

    /// Closes the open stroke; returns its id.
    pub fn finish(&mut self) -> Option<u64> {
        let stroke = self.active.take()?;
        let id = stroke.id;
        self.strokes.push(stroke);
        Some(id)
    }

    /// Removes every finished stroke with a point inside `radius`.
    pub fn sweep(&mut self, point: Point, radius: f64) -> Vec<PaintStroke> {
        let (swept, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.strokes)
            .into_iter()
            .partition(|s| s.touches(point, radius));
        self.strokes = kept;
        swept
    }

    pub fn remove(&mut self, id: u64) -> Option<PaintStroke> {
        let idx = self.strokes.iter().position(|s| s.id == id)?;
        Some(self.strokes.remove(idx))
    }

    pub fn load(&mut self, strokes: Vec<PaintStroke>) {
        let strokes: Vec<PaintStroke> = strokes
            .into_iter()
            .filter(|s| !s.points.is_empty() && s.points.iter().all(|p| p.is_finite()))
            .collect();
        self.next_id = strokes.iter().map(|s| s.id).max().map_or(1, |m| m + 1);
        self.strokes = strokes;
        self.active = None;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_drag_is_interpolated() {
        let mut canvas = PaintCanvas::new(8.0);
        canvas.begin(Point::new(0.0, 0.0), StrokeStyle::Solid("#FF4444".into()), 10.0);
        canvas.extend(Point::new(100.0, 0.0));
        canvas.finish();
        let pts = &canvas.strokes()[0].points;
        assert!(pts.len() > 2);
        assert_eq!(*pts.last().unwrap(), Point::new(100.0, 0.0));
        for w in pts.windows(2) {
            assert!(w[0].distance(w[1]) <= 8.0 + 1e-9);
        }
    }

    #[test]
    fn tiny_smoothing_is_floored() {
        let mut canvas = PaintCanvas::new(1e-300);
        canvas.begin(Point::new(0.0, 0.0), StrokeStyle::Rainbow, 10.0);
        canvas.extend(Point::new(100.0, 0.0));
        assert_eq!(canvas.active().unwrap().points.len(), 101);
    }

    #[test]
    fn short_moves_are_kept_verbatim() {
        let mut canvas = PaintCanvas::new(8.0);
        canvas.begin(Point::new(0.0, 0.0), StrokeStyle::Rainbow, 10.0);
        canvas.extend(Point::new(3.0, 4.0));
        assert_eq!(canvas.active().unwrap().points.len(), 2);
        assert_eq!(canvas.iter().count(), 1);
    }

    #[test]
    fn extend_without_stroke_is_ignored() {
        let mut canvas = PaintCanvas::new(8.0);
        assert!(!canvas.extend(Point::new(1.0, 1.0)));
        assert_eq!(canvas.finish(), None);
    }

    #[test]
    fn rainbow_cycles_colours() {
        let stroke = PaintStroke {
            id: 1,
            points: Vec::new(),
            style: StrokeStyle::Rainbow,
            width: 5.0,
        };
        assert_eq!(stroke.color_at(0), RAINBOW[0]);
        assert_eq!(stroke.color_at(8), RAINBOW[1]);
    }

    #[test]
    fn sweep_removes_touched_strokes() {
        let mut canvas = PaintCanvas::new(8.0);
        canvas.begin(Point::new(0.0, 0.0), StrokeStyle::Rainbow, 10.0);
        canvas.extend(Point::new(20.0, 0.0));
        canvas.finish();
        canvas.begin(Point::new(300.0, 300.0), StrokeStyle::Rainbow, 10.0);
        canvas.finish();
        assert_eq!(canvas.sweep(Point::new(10.0, 40.0), 60.0).len(), 1);
        assert_eq!(canvas.strokes().len(), 1);
    }
}
