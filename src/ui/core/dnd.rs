//! Drag and drop capabilities.
//!
//! A [`DragSource`] reports the task id it would carry, or `None` while it
//! can't be dragged. A [`DropTarget`] reports its zone and whether a screen
//! cell belongs to it. [`DragState`] follows one drag from start to end and
//! hands back a [`DragEnd`] pair; deciding what that pair means is left to
//! the board.

use crate::entities::{TaskId, ZoneId};

pub trait DragSource {
    /// Id carried by a drag started here, `None` when dragging is disabled
    fn drag_id(&self) -> Option<TaskId>;
}

pub trait DropTarget {
    fn zone_id(&self) -> ZoneId;

    /// Whether the terminal cell at (`column`, `row`) is inside this target
    fn contains(&self, column: u16, row: u16) -> bool;
}

/// Outcome of a finished drag: what was dragged and which zone it ended over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active: TaskId,
    pub over: Option<ZoneId>,
}

/// First target containing the cell, if any
pub fn target_at(targets: &[&dyn DropTarget], column: u16, row: u16) -> Option<ZoneId> {
    targets
        .iter()
        .find(|target| target.contains(column, row))
        .map(|target| target.zone_id())
}

#[derive(Debug, Default, Clone)]
pub struct DragState {
    active: Option<TaskId>,
    over: Option<ZoneId>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `source`. Refused when the source is disabled or a drag is already running.
    pub fn start(&mut self, source: &dyn DragSource, over: Option<ZoneId>) -> bool {
        if self.active.is_some() {
            return false;
        }
        match source.drag_id() {
            Some(id) => {
                self.active = Some(id);
                self.over = over;
                true
            }
            None => false,
        }
    }

    pub fn hover(&mut self, over: Option<ZoneId>) {
        if self.active.is_some() {
            self.over = over;
        }
    }

    /// End the drag over the current hover target
    pub fn finish(&mut self) -> Option<DragEnd> {
        let active = self.active.take()?;
        Some(DragEnd {
            active,
            over: self.over.take(),
        })
    }

    /// Abandon the drag; the result carries no target so applying it changes nothing
    pub fn cancel(&mut self) -> Option<DragEnd> {
        self.over = None;
        self.finish()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<TaskId> {
        self.active
    }

    pub fn over(&self) -> Option<ZoneId> {
        self.over
    }
}
