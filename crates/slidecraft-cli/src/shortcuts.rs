//! Keyboard shortcut registry.

use slidecraft_core::EditorCommand;

/// A key combination bound to an editor command.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub ctrl: bool,
    pub shift: bool,
    pub command: EditorCommand,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        command: EditorCommand,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Letter keys match case-insensitively; named keys must match exactly.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.ctrl == ctrl && self.shift == shift && self.key.eq_ignore_ascii_case(key)
    }
}

/// All key bindings of the editor.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        use EditorCommand as C;
        Self {
            shortcuts: vec![
                Shortcut::new("Z", true, false, C::Undo, "Undo"),
                Shortcut::new("Y", true, false, C::Redo, "Redo"),
                Shortcut::new("Z", true, true, C::Redo, "Redo"),
                Shortcut::new("C", true, false, C::Copy, "Copy selected objects"),
                Shortcut::new("V", true, false, C::Paste, "Paste objects"),
                Shortcut::new("X", true, false, C::Cut, "Cut selected objects"),
                Shortcut::new("D", true, false, C::Duplicate, "Duplicate selected objects"),
                Shortcut::new("A", true, false, C::SelectAll, "Select all objects on the slide"),
                Shortcut::new("Delete", false, false, C::Delete, "Delete selected objects"),
                Shortcut::new("Backspace", false, false, C::Delete, "Delete selected objects"),
                Shortcut::new("Escape", false, false, C::CancelInteraction, "Cancel the current drag"),
                Shortcut::new("]", true, false, C::BringForward, "Bring forward"),
                Shortcut::new("[", true, false, C::SendBackward, "Send backward"),
                Shortcut::new("]", true, true, C::BringToFront, "Bring to front"),
                Shortcut::new("[", true, true, C::SendToBack, "Send to back"),
                Shortcut::new("=", true, false, C::ZoomIn, "Zoom in"),
                Shortcut::new("-", true, false, C::ZoomOut, "Zoom out"),
                Shortcut::new("0", true, false, C::ResetZoom, "Reset zoom"),
                Shortcut::new("'", true, false, C::ToggleGrid, "Toggle grid"),
                Shortcut::new("PageDown", false, false, C::NextSlide, "Next slide"),
                Shortcut::new("PageUp", false, false, C::PreviousSlide, "Previous slide"),
            ],
        }
    }
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Command bound to a key press, if any.
    pub fn lookup(&self, key: &str, ctrl: bool, shift: bool) -> Option<&EditorCommand> {
        self.shortcuts
            .iter()
            .find(|s| s.matches(key, ctrl, shift))
            .map(|s| &s.command)
    }

    /// Print all shortcuts to stdout.
    pub fn print_all(&self) {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in &self.shortcuts {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
