//! Replayable editor scripts.
//!
//! A script is a JSON array of steps. Pointer coordinates are screen
//! coordinates, so the session zoom applies to them:
//!
//! ```json
//! [
//!   { "step": "pointerDown", "x": 100, "y": 100 },
//!   { "step": "pointerMove", "x": 150, "y": 130 },
//!   { "step": "pointerUp" },
//!   { "step": "key", "key": "z", "ctrl": true }
//! ]
//! ```

use crate::shortcuts::ShortcutRegistry;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use slidecraft_core::{EditorCommand, EditorSession, InteractionMode, SlideObject};

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum ScriptStep {
    /// Press at a screen position; whatever is topmost there is the target.
    #[serde(rename_all = "camelCase")]
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default = "default_mode")]
        mode: InteractionMode,
        #[serde(default)]
        multi_select: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    PointerLeave,
    /// A key press, resolved through the shortcut registry.
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
    },
    /// Run an editor command directly.
    Command(EditorCommand),
    /// Insert an object on the current slide and record it in history.
    AddObject {
        object: SlideObject,
    },
    SelectSlide {
        index: usize,
    },
}

fn default_mode() -> InteractionMode {
    InteractionMode::Move
}

/// Parse a script from JSON.
pub fn parse(json: &str) -> Result<Vec<ScriptStep>, serde_json::Error> {
    serde_json::from_str(json)
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps that changed something.
    pub applied: usize,
    /// Steps that were valid but had no effect, or unbound keys.
    pub ignored: usize,
}

/// Feed steps into a session in order.
pub fn replay(
    session: &mut EditorSession,
    steps: &[ScriptStep],
    shortcuts: &ShortcutRegistry,
) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (i, step) in steps.iter().enumerate() {
        let applied = apply_step(session, step, shortcuts);
        if applied {
            report.applied += 1;
        } else {
            log::debug!("Step {i} had no effect: {step:?}");
            report.ignored += 1;
        }
    }
    // A script that ends mid-drag still keeps the drag.
    if session.pointer_up().is_some() {
        log::debug!("Closed interaction left open by script");
    }
    report
}

fn apply_step(session: &mut EditorSession, step: &ScriptStep, shortcuts: &ShortcutRegistry) -> bool {
    match step {
        ScriptStep::PointerDown {
            x,
            y,
            mode,
            multi_select,
        } => session
            .pointer_down_at(Point::new(*x, *y), *mode, *multi_select)
            .is_some(),
        ScriptStep::PointerMove { x, y } => session.pointer_move(Point::new(*x, *y)),
        ScriptStep::PointerUp => session.pointer_up().is_some(),
        ScriptStep::PointerLeave => session.pointer_leave().is_some(),
        ScriptStep::Key { key, ctrl, shift } => match shortcuts.lookup(key, *ctrl, *shift) {
            Some(command) => session.execute(command),
            None => {
                log::warn!("No shortcut bound to {key} (ctrl: {ctrl}, shift: {shift})");
                false
            }
        },
        ScriptStep::Command(command) => session.execute(command),
        ScriptStep::AddObject { object } => {
            session.add_object(object.clone());
            session.commit();
            true
        }
        ScriptStep::SelectSlide { index } => session.set_current_slide(*index),
    }
}
