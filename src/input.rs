/// Mouse-driven fingertip: while the left button is held, every press and
/// drag position becomes a fingertip for the next tick.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use glam::Vec2;

use food_slicer::error::{Error, Result};
use food_slicer::pose::PoseSource;

pub struct MousePose {
    viewport: Vec2,
    cols: u16,
    rows: u16,
    held: bool,
    last: Option<Vec2>,
    pending: Vec<Vec2>,
}

impl MousePose {
    /// `rows` is the height of the play area in terminal cells.
    pub fn new(viewport_width: u32, viewport_height: u32, cols: u16, rows: u16) -> Self {
        MousePose {
            viewport: Vec2::new(viewport_width as f32, viewport_height as f32),
            cols,
            rows,
            held: false,
            last: None,
            pending: Vec::new(),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Centre of a terminal cell in viewport pixels.
    fn to_viewport(&self, column: u16, row: u16) -> Vec2 {
        let cell = self.viewport / Vec2::new(self.cols.max(1) as f32, self.rows.max(1) as f32);
        Vec2::new(column as f32 + 0.5, row as f32 + 0.5) * cell
    }

    pub fn handle(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                let p = self.to_viewport(event.column, event.row);
                self.held = true;
                self.last = Some(p);
                self.pending.push(p);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.held = false;
                self.last = None;
            }
            _ => {}
        }
    }
}

impl PoseSource for MousePose {
    fn fingertips(&mut self) -> Result<Vec<Vec2>> {
        if self.cols == 0 || self.rows == 0 {
            return Err(Error::InputUnavailable);
        }
        if !self.pending.is_empty() {
            return Ok(std::mem::take(&mut self.pending));
        }
        // A held but motionless button still counts as a finger in view.
        Ok(match (self.held, self.last) {
            (true, Some(p)) => vec![p],
            _ => Vec::new(),
        })
    }
}
