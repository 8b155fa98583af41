//! Pointer routing: which tool is selected and whether a drag is in progress.
//!
//! The controller never touches the garden itself. It turns raw pointer
//! events into [`ToolCommand`]s for the session to execute.

use crate::model::{Point, Tool};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    /// Pointer went down.
    Start,
    /// Pointer moved while down.
    Continue,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolCommand {
    pub tool: Tool,
    pub point: Point,
    pub stroke: Stroke,
}

#[derive(Clone, Debug)]
pub struct ToolController {
    selected: Tool,
    phase: PointerPhase,
    last_point: Option<Point>,
    /// Where and when (seconds) the last discrete placement fired.
    last_placement: Option<(Point, f64)>,
    min_distance: f64,
    min_interval: f64,
}

impl ToolController {
    pub fn new(min_distance: f64, min_interval: f64) -> Self {
        Self {
            selected: Tool::default(),
            phase: PointerPhase::Idle,
            last_point: None,
            last_placement: None,
            min_distance,
            min_interval,
        }
    }

    pub fn selected(&self) -> Tool {
        self.selected
    }

    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == PointerPhase::Active
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Switches tool. A drag in progress is abandoned; returns true if so.
    /// Immediate tools (undo, reset) are not retained as the selection.
    pub fn select(&mut self, tool: Tool) -> bool {
        let interrupted = self.is_active();
        if interrupted {
            log::debug!("tool switched mid-drag, dropping {:?} gesture", self.selected);
            self.phase = PointerPhase::Idle;
            self.last_placement = None;
        }
        if !tool.is_immediate() {
            self.selected = tool;
        }
        interrupted
    }

    pub fn pointer_down(&mut self, point: Point, now: f64) -> Option<ToolCommand> {
        if self.selected.is_immediate() {
            return None;
        }
        self.phase = PointerPhase::Active;
        self.last_point = Some(point);
        self.last_placement = self.selected.is_discrete().then_some((point, now));
        Some(ToolCommand {
            tool: self.selected,
            point,
            stroke: Stroke::Start,
        })
    }

    /// Continuous tools fire on every move; discrete ones only once the
    /// pointer has travelled far enough and enough time has passed.
    pub fn pointer_move(&mut self, point: Point, now: f64) -> Option<ToolCommand> {
        if !self.is_active() {
            return None;
        }
        self.last_point = Some(point);
        if self.selected.is_discrete() {
            if let Some((at, when)) = self.last_placement {
                if at.distance(point) < self.min_distance || now - when < self.min_interval {
                    return None;
                }
            }
            self.last_placement = Some((point, now));
        }
        Some(ToolCommand {
            tool: self.selected,
            point,
            stroke: Stroke::Continue,
        })
    }

    /// Ends the drag; returns the tool that was active.
    pub fn pointer_up(&mut self) -> Option<Tool> {
        if !self.is_active() {
            return None;
        }
        self.phase = PointerPhase::Idle;
        self.last_placement = None;
        Some(self.selected)
    }

    /// Drops any drag in progress; the selection is kept.
    pub fn reset(&mut self) {
        self.phase = PointerPhase::Idle;
        self.last_point = None;
        self.last_placement = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ToolController {
        ToolController::new(40.0, 0.25)
    }

    #[test]
    fn idle_moves_do_nothing() {
        let mut tc = controller();
        assert_eq!(tc.pointer_move(Point::new(1.0, 1.0), 0.0), None);
        assert_eq!(tc.pointer_up(), None);
    }

    #[test]
    fn continuous_tool_fires_every_move() {
        let mut tc = controller();
        tc.select(Tool::Mow);
        assert_eq!(tc.pointer_down(Point::new(0.0, 0.0), 0.0).unwrap().stroke, Stroke::Start);
        for i in 1..5 {
            let cmd = tc.pointer_move(Point::new(i as f64, 0.0), 0.0).unwrap();
            assert_eq!(cmd.stroke, Stroke::Continue);
            assert_eq!(cmd.tool, Tool::Mow);
        }
        assert_eq!(tc.pointer_up(), Some(Tool::Mow));
        assert_eq!(tc.phase(), PointerPhase::Idle);
    }

    #[test]
    fn discrete_tool_is_throttled() {
        let mut tc = controller();
        tc.select(Tool::PlantFlower);
        tc.pointer_down(Point::new(0.0, 0.0), 0.0);
        assert!(tc.pointer_move(Point::new(10.0, 0.0), 1.0).is_none());
        assert!(tc.pointer_move(Point::new(50.0, 0.0), 0.1).is_none());
        assert!(tc.pointer_move(Point::new(50.0, 0.0), 0.5).is_some());
        assert!(tc.pointer_move(Point::new(60.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn switching_mid_drag_returns_to_idle() {
        let mut tc = controller();
        tc.pointer_down(Point::new(0.0, 0.0), 0.0);
        assert!(tc.select(Tool::Paint));
        assert_eq!(tc.phase(), PointerPhase::Idle);
        assert!(tc.pointer_move(Point::new(5.0, 5.0), 0.0).is_none());
        assert!(!tc.select(Tool::Sweep));
    }

    #[test]
    fn immediate_tools_never_become_the_selection() {
        let mut tc = controller();
        tc.select(Tool::Rainbow);
        tc.select(Tool::Undo);
        assert_eq!(tc.selected(), Tool::Rainbow);
        tc.select(Tool::Reset);
        assert_eq!(tc.selected(), Tool::Rainbow);
    }
}
