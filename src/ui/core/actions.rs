use crate::entities::{TaskId, ZoneId};

/// Which part of the board receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Zone(ZoneId),
}

impl Focus {
    /// Tab order: input → pending → completed → input
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Zone(ZoneId::Pending),
            Self::Zone(ZoneId::Pending) => Self::Zone(ZoneId::Completed),
            Self::Zone(ZoneId::Completed) => Self::Input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // New task input
    DraftInput(char),
    DraftBackspace,
    AddTask,

    // Item controls
    CompleteTask(TaskId),
    DeleteTask(TaskId),
    EnterEditMode(TaskId),
    ExitEditMode,
    EditTask { id: TaskId, text: String },

    // Drag and drop
    DragStart { id: TaskId, over: Option<ZoneId> },
    DragOver(Option<ZoneId>),
    DragEnd,
    DragCancel,

    // Navigation
    SetFocus(Focus),
    NextFocus,
    SelectNext,
    SelectPrevious,
    Select { zone: ZoneId, index: usize },

    // UI operations
    ShowHelp(bool),
    ShowLogs(bool),
    CycleIconTheme,

    // App control
    Quit,
    None,
}
