//! Icon service for managing different icon themes
//!
//! Every glyph the board draws (task status, item buttons, drag markers)
//! comes from here so the whole UI can switch between emoji, Unicode and
//! plain ASCII.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown icon theme '{0}', expected 'emoji', 'unicode' or 'ascii'")]
pub struct ParseIconThemeError(pub String);

impl FromStr for IconTheme {
    type Err = ParseIconThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emoji" => Ok(Self::Emoji),
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(ParseIconThemeError(other.to_string())),
        }
    }
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Item control icons
#[derive(Debug, Clone)]
pub struct ButtonIcons {
    pub complete: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
}

/// Drag and drop markers
#[derive(Debug, Clone)]
pub struct DragIcons {
    pub handle: &'static str,
    pub grabbed: &'static str,
    pub drop_here: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub buttons: ButtonIcons,
    pub drag: DragIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            buttons: ButtonIcons {
                complete: "✔️",
                delete: "✖️",
                edit: "✏️",
            },
            drag: DragIcons {
                handle: "⠿",
                grabbed: "✊",
                drop_here: "📥",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "■",
            },
            buttons: ButtonIcons {
                complete: "✔",
                delete: "✖",
                edit: "✎",
            },
            drag: DragIcons {
                handle: "⠿",
                grabbed: "⇕",
                drop_here: "⤓",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            buttons: ButtonIcons {
                complete: "v",
                delete: "x",
                edit: "e",
            },
            drag: DragIcons {
                handle: "::",
                grabbed: "<>",
                drop_here: "v",
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    #[must_use]
    pub fn complete_button(&self) -> &'static str {
        self.icons().buttons.complete
    }

    #[must_use]
    pub fn delete_button(&self) -> &'static str {
        self.icons().buttons.delete
    }

    #[must_use]
    pub fn edit_button(&self) -> &'static str {
        self.icons().buttons.edit
    }

    #[must_use]
    pub fn drag_handle(&self) -> &'static str {
        self.icons().drag.handle
    }

    #[must_use]
    pub fn drag_grabbed(&self) -> &'static str {
        self.icons().drag.grabbed
    }

    #[must_use]
    pub fn drop_here(&self) -> &'static str {
        self.icons().drag.drop_here
    }
}
