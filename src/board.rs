//! The task board: both zones' contents, the new-task draft and edit mode.
//!
//! Every operation is a plain state transition that runs to completion.
//! Requests that don't apply (unknown id, wrong source zone, blank draft)
//! are no-ops and report `false` instead of failing. After each mutation the
//! board bumps its revision and notifies subscribers so the UI can redraw.

use crate::entities::{Task, TaskId, ZoneId};
use tokio::sync::mpsc;

/// Notification sent to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    TaskAdded(TaskId),
    TaskMoved { id: TaskId, from: ZoneId, to: ZoneId },
    TaskEdited(TaskId),
    TaskDeleted(TaskId),
    EditingChanged(Option<TaskId>),
    DraftChanged,
}

#[derive(Debug, Default)]
pub struct Board {
    pending: Vec<Task>,
    completed: Vec<Task>,
    draft: String,
    editing: Option<TaskId>,
    revision: u64,
    subscribers: Vec<mpsc::UnboundedSender<BoardEvent>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register for change notifications. Dropped receivers are pruned on the next send.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<BoardEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn tasks(&self, zone: ZoneId) -> &[Task] {
        match zone {
            ZoneId::Pending => &self.pending,
            ZoneId::Completed => &self.completed,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing == Some(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Total number of tasks across both zones
    pub fn len(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locate a task and the zone that owns it
    pub fn find(&self, id: TaskId) -> Option<(ZoneId, &Task)> {
        ZoneId::ALL
            .into_iter()
            .find_map(|zone| self.tasks(zone).iter().find(|t| t.id == id).map(|t| (zone, t)))
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.notify(BoardEvent::DraftChanged);
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
        self.notify(BoardEvent::DraftChanged);
    }

    pub fn pop_draft_char(&mut self) -> bool {
        if self.draft.pop().is_some() {
            self.notify(BoardEvent::DraftChanged);
            true
        } else {
            false
        }
    }

    /// Append the draft as a new pending task and clear the draft.
    ///
    /// Blank drafts are ignored. The text is stored as typed; trimming is only
    /// used for the emptiness check.
    pub fn add_task(&mut self) -> Option<TaskId> {
        if self.draft.trim().is_empty() {
            log::debug!("Ignoring add: draft is blank");
            return None;
        }

        let task = Task::new(std::mem::take(&mut self.draft));
        let id = task.id;
        self.pending.push(task);
        self.notify(BoardEvent::TaskAdded(id));
        Some(id)
    }

    /// Resolve a finished drag of `active` over `over` into a move.
    ///
    /// Only pending → completed and completed → pending moves apply; the moved
    /// task is appended to the destination.
    pub fn drag_end(&mut self, active: TaskId, over: Option<ZoneId>) -> bool {
        let Some(target) = over else {
            log::debug!("Drag of {} ended outside any zone", active);
            return false;
        };

        let source = target.other();
        let Some(index) = self.tasks(source).iter().position(|t| t.id == active) else {
            log::debug!("Drag of {} over {} ignored: not in {}", active, target, source);
            return false;
        };

        let task = self.tasks_mut(source).remove(index);
        self.tasks_mut(target)
            .push(task.with_completed(target == ZoneId::Completed));

        if target == ZoneId::Completed && self.editing == Some(active) {
            self.editing = None;
            self.notify(BoardEvent::EditingChanged(None));
        }

        self.notify(BoardEvent::TaskMoved {
            id: active,
            from: source,
            to: target,
        });
        true
    }

    /// Primary button on a pending item: same as dropping it on the completed zone
    pub fn complete_task(&mut self, id: TaskId) -> bool {
        self.drag_end(id, Some(ZoneId::Completed))
    }

    /// Replace the text of a pending task. Completed tasks are not editable.
    pub fn edit_task(&mut self, id: TaskId, text: impl Into<String>) -> bool {
        let Some(task) = self.pending.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = text.into();
        self.notify(BoardEvent::TaskEdited(id));
        true
    }

    /// Remove a task from the completed zone. Pending tasks can't be deleted.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.completed.len();
        self.completed.retain(|t| t.id != id);
        if self.completed.len() == before {
            return false;
        }

        if self.editing == Some(id) {
            self.editing = None;
        }
        self.notify(BoardEvent::TaskDeleted(id));
        true
    }

    /// Enter edit mode for `id`, or leave it with `None`.
    ///
    /// Only one task is ever in edit mode, so entering it for a new id drops
    /// the previous one. Only pending tasks can enter edit mode.
    pub fn set_editing(&mut self, id: Option<TaskId>) -> bool {
        if let Some(id) = id {
            if !self.pending.iter().any(|t| t.id == id) {
                return false;
            }
        }
        if self.editing == id {
            return false;
        }

        self.editing = id;
        self.notify(BoardEvent::EditingChanged(id));
        true
    }

    fn tasks_mut(&mut self, zone: ZoneId) -> &mut Vec<Task> {
        match zone {
            ZoneId::Pending => &mut self.pending,
            ZoneId::Completed => &mut self.completed,
        }
    }

    fn notify(&mut self, event: BoardEvent) {
        self.revision += 1;
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
