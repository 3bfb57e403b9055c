//! Keyboard chord handling
//!
//! Maps platform-conventional chords onto session messages. The host
//! resolves its own key events into [`Key`]/[`Modifiers`] (folding Cmd on
//! macOS and Ctrl elsewhere into `command`) and applies the returned `Msg`
//! through the session controller.

use super::messages::Msg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl, or Cmd on macOS
    pub command: bool,
    pub shift: bool,
}

/// Session context the chords depend on
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortcutContext {
    /// Undo/redo chords are suppressed while the surface is read-only
    pub read_only: bool,
    pub fullscreen: bool,
    pub selecting: bool,
}

pub fn handle_key_event(key: Key, modifiers: Modifiers, ctx: ShortcutContext) -> Option<Msg> {
    match key {
        // Undo/redo chords: Ctrl/Cmd+Z, Shift variant, and Y
        Key::Character(c)
            if c.eq_ignore_ascii_case(&'z') && modifiers.command && !modifiers.shift =>
        {
            (!ctx.read_only).then_some(Msg::Undo)
        }
        Key::Character(c)
            if (c.eq_ignore_ascii_case(&'y') && modifiers.command)
                || (c.eq_ignore_ascii_case(&'z') && modifiers.command && modifiers.shift) =>
        {
            (!ctx.read_only).then_some(Msg::Redo)
        }
        Key::Escape if ctx.fullscreen => Some(Msg::CloseFullscreen),
        Key::Escape if ctx.selecting => Some(Msg::CancelSelection),
        _ => None,
    }
}
