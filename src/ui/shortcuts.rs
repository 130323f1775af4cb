// LogWindow - ui/shortcuts.rs
//
// Window-wide keyboard shortcuts.
//
// | Key          | Command        |
// |--------------|----------------|
// | Escape       | StopSearch     |
// | Ctrl+F       | AttachSearch   |
// | Enter        | NextMatch      |
// | Shift+Enter  | PreviousMatch  |
//
// Keys are consumed from the input queue before any widget is drawn, so the
// search entry never sees them (an Enter would otherwise drop its focus).

use crate::app::log_window::WindowCommand;
use egui::{Event, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shortcut {
    StopSearch,
    AttachSearch,
    PreviousMatch,
    NextMatch,
}

impl Shortcut {
    /// Map one key press to a shortcut. Modifiers are matched exactly, so
    /// Ctrl+Shift+F is not Ctrl+F. Shift+Enter is checked before Enter.
    fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::Escape if modifiers.is_none() => Some(Self::StopSearch),
            Key::F if modifiers.command && !modifiers.shift && !modifiers.alt => {
                Some(Self::AttachSearch)
            }
            Key::Enter if modifiers.shift_only() => Some(Self::PreviousMatch),
            Key::Enter if modifiers.is_none() => Some(Self::NextMatch),
            _ => None,
        }
    }

    /// Match stepping is left alone while search is detached.
    fn needs_attached(self) -> bool {
        matches!(self, Self::PreviousMatch | Self::NextMatch)
    }

    fn command(self) -> WindowCommand {
        match self {
            Self::StopSearch => WindowCommand::StopSearch,
            Self::AttachSearch => WindowCommand::AttachSearch,
            Self::PreviousMatch => WindowCommand::PreviousMatch,
            Self::NextMatch => WindowCommand::NextMatch,
        }
    }
}

/// Consume this frame's shortcut key presses and translate them into
/// window commands, in the order the keys were pressed.
/// `search_attached` gates Enter / Shift+Enter.
pub fn collect(ctx: &egui::Context, search_attached: bool) -> Vec<WindowCommand> {
    ctx.input_mut(|input| {
        let mut commands = Vec::new();
        input.events.retain(|event| {
            let Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            else {
                return true;
            };
            match Shortcut::from_key(*key, *modifiers) {
                Some(shortcut) if search_attached || !shortcut.needs_attached() => {
                    commands.push(shortcut.command());
                    false
                }
                _ => true,
            }
        });
        commands
    })
}
