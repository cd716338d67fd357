//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit/refresh shortcuts
/// Terminals do not forward the Cmd key, so Ctrl is used everywhere
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Refresh shortcut display
pub const REFRESH_SHORTCUT: &str = "Ctrl+R";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Ctrl+C";
