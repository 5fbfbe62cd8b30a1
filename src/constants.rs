//! Constants used throughout the application
//!
//! This module centralizes UI text, log file names and layout limits.

// Zone titles
pub const DEFAULT_PENDING_TITLE: &str = "Tasks";
pub const DEFAULT_COMPLETED_TITLE: &str = "Completed tasks";
/// Longest zone title accepted by config validation
pub const ZONE_TITLE_MAX_LEN: usize = 40;

// Input bar
pub const INPUT_PLACEHOLDER: &str = "Add a new task";
pub const ADD_BUTTON_LABEL: &str = "[Add]";

// Status bar hints
pub const HINT_NORMAL: &str = "a: new • Space: grab • c: done/delete • e: edit • Tab: focus • ?: help • q: quit";
pub const HINT_INPUT: &str = "Enter: add • Esc/Tab: leave input";
pub const HINT_EDITING: &str = "Typing edits the task • Enter/Esc: done";
pub const HINT_DRAGGING: &str = "←/→/Tab: choose zone • Space/Enter: drop • Esc: cancel";

// Log messages
pub const LOG_APP_STARTED: &str = "todozone started";
pub const LOG_APP_STOPPED: &str = "todozone stopped";

// Files
pub const APP_DIR_NAME: &str = "todozone";
pub const LOCAL_CONFIG_FILE: &str = "todozone.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "todozone.log";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";

/// Width of the "Add" button column in the input bar
pub const ADD_BUTTON_WIDTH: u16 = 7;
