//! Editor session: one presentation plus its transient editing state.

use crate::camera::Camera;
use crate::config::EditorConfig;
use crate::document::{Presentation, Slide};
use crate::history::History;
use crate::interaction::{InteractionContext, InteractionController, InteractionMode, InteractionSummary};
use crate::objects::{ObjectId, SlideObject};
use crate::selection::Selection;
use crate::snap::GridSettings;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Zoom change applied by [`EditorCommand::ZoomIn`] / [`EditorCommand::ZoomOut`].
pub const ZOOM_STEP: f64 = 0.1;

/// Which way a guide line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    Horizontal,
    Vertical,
}

/// A ruler guide at a document coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(rename = "type")]
    pub orientation: GuideOrientation,
    pub position: f64,
}

/// The surface the editor is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Editor,
    Presenter,
    Sorter,
    Notes,
}

/// Discrete editor actions, typically bound to keyboard shortcuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum EditorCommand {
    Undo,
    Redo,
    Copy,
    Paste,
    Cut,
    /// Duplicate the selected objects.
    Duplicate,
    /// Delete the selected objects.
    Delete,
    SelectAll,
    ClearSelection,
    CancelInteraction,
    BringForward,
    SendBackward,
    BringToFront,
    SendToBack,
    AddSlide,
    DuplicateSlide,
    DeleteSlide,
    NextSlide,
    PreviousSlide,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SetZoom { zoom: f64 },
    ToggleGrid,
    ToggleSnap,
    SetGridSize { size: f64 },
    SetMode { mode: EditorMode },
    AddGuide { orientation: GuideOrientation, position: f64 },
    RemoveGuide { index: usize },
}

impl EditorCommand {
    /// Whether a successful run of this command should be recorded in history.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Self::Paste
                | Self::Cut
                | Self::Duplicate
                | Self::Delete
                | Self::BringForward
                | Self::SendBackward
                | Self::BringToFront
                | Self::SendToBack
                | Self::AddSlide
                | Self::DuplicateSlide
                | Self::DeleteSlide
        )
    }
}

/// Owns a presentation and everything needed to edit it.
///
/// The session keeps a history snapshot of the initial state, so the first
/// real edit can always be undone.
#[derive(Debug, Clone)]
pub struct EditorSession {
    presentation: Presentation,
    current_slide: usize,
    selection: Selection,
    clipboard: Vec<SlideObject>,
    history: History<Presentation>,
    interaction: InteractionController,
    /// View transform. Its zoom scales pointer deltas.
    pub camera: Camera,
    grid: GridSettings,
    guides: Vec<Guide>,
    mode: EditorMode,
    config: EditorConfig,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Start a session on a new blank presentation.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_presentation(Presentation::new(), config)
    }

    /// Start a session on an existing presentation.
    pub fn with_presentation(presentation: Presentation, config: EditorConfig) -> Self {
        let mut session = Self {
            presentation,
            current_slide: 0,
            selection: Selection::new(),
            clipboard: Vec::new(),
            history: History::new(config.history_capacity),
            interaction: InteractionController::new(),
            camera: Camera::with_limits(config.min_zoom, config.max_zoom),
            grid: config.grid,
            guides: Vec::new(),
            mode: EditorMode::default(),
            config,
        };
        session.commit();
        session
    }

    /// Replace the presentation, dropping all transient state and history.
    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
        self.current_slide = 0;
        self.selection.clear();
        self.interaction = InteractionController::new();
        self.history.clear();
        self.commit();
    }

    /// Back to a blank presentation with default view settings.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
        log::debug!("Editor session reset");
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn current_slide_index(&self) -> usize {
        self.current_slide
    }

    pub fn current_slide(&self) -> &Slide {
        &self.presentation.slides()[self.current_slide]
    }

    fn current_slide_mut(&mut self) -> &mut Slide {
        &mut self.presentation.slides_mut()[self.current_slide]
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clipboard(&self) -> &[SlideObject] {
        &self.clipboard
    }

    pub fn history(&self) -> &History<Presentation> {
        &self.history
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn grid(&self) -> GridSettings {
        self.grid
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    // --- Slides ---

    /// Switch slides. Out-of-range indices are ignored.
    pub fn set_current_slide(&mut self, index: usize) -> bool {
        if index >= self.presentation.slide_count() {
            log::warn!("Slide index {index} out of range");
            return false;
        }
        if index != self.current_slide {
            self.pointer_up();
        }
        self.current_slide = index;
        self.selection.clear();
        true
    }

    /// Insert a blank slide (at the end by default) and make it current.
    pub fn add_slide(&mut self, at: Option<usize>) -> usize {
        self.pointer_up();
        let index = self.presentation.add_slide(at);
        self.current_slide = index;
        self.selection.clear();
        log::debug!("Added slide at {index}");
        index
    }

    /// Copy a slide, insert it after the original, and make it current.
    pub fn duplicate_slide(&mut self, index: usize) -> Option<usize> {
        self.pointer_up();
        let copy = self.presentation.duplicate_slide(index)?;
        self.current_slide = copy;
        self.selection.clear();
        log::debug!("Duplicated slide {index} to {copy}");
        Some(copy)
    }

    /// Delete a slide. The only remaining slide can not be deleted.
    pub fn delete_slide(&mut self, index: usize) -> bool {
        self.pointer_up();
        if !self.presentation.delete_slide(index) {
            log::warn!(
                "Refusing to delete slide {index} of {}",
                self.presentation.slide_count()
            );
            return false;
        }
        // The slide on screen stays current unless it was the one deleted.
        if index < self.current_slide {
            self.current_slide -= 1;
        } else if index == self.current_slide {
            self.selection.clear();
            self.clamp_current_slide();
        }
        log::debug!("Deleted slide {index}");
        true
    }

    /// Reorder slides. The moved slide becomes current.
    pub fn move_slide(&mut self, from: usize, to: usize) -> bool {
        self.pointer_up();
        if !self.presentation.move_slide(from, to) {
            return false;
        }
        if self.current_slide != from {
            self.selection.clear();
        }
        self.current_slide = to;
        true
    }

    /// Edit a slide in place.
    pub fn update_slide(&mut self, index: usize, f: impl FnOnce(&mut Slide)) -> bool {
        let Some(slide) = self.presentation.slides_mut().get_mut(index) else {
            return false;
        };
        let id = slide.id;
        f(slide);
        slide.id = id;
        self.presentation.touch();
        true
    }

    fn clamp_current_slide(&mut self) {
        let last = self.presentation.slide_count().saturating_sub(1);
        self.current_slide = self.current_slide.min(last);
    }

    // --- Objects ---

    /// Add an object to the current slide on top of the others and select it.
    pub fn add_object(&mut self, mut object: SlideObject) -> ObjectId {
        let slide = self.current_slide_mut();
        object.id = Uuid::new_v4();
        object.z_index = slide.next_z_index();
        let id = object.id;
        slide.add_object(object);
        self.selection.select(id);
        self.presentation.touch();
        id
    }

    /// Edit an object on the current slide. Its id is preserved.
    pub fn update_object(&mut self, id: ObjectId, f: impl FnOnce(&mut SlideObject)) -> bool {
        let Some(object) = self.current_slide_mut().get_object_mut(id) else {
            return false;
        };
        f(object);
        object.id = id;
        self.presentation.touch();
        true
    }

    pub fn delete_object(&mut self, id: ObjectId) -> bool {
        if self.current_slide_mut().remove_object(id).is_none() {
            return false;
        }
        self.selection.remove(id);
        self.presentation.touch();
        true
    }

    /// Delete every selected object. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.ids().to_vec();
        ids.into_iter().filter(|&id| self.delete_object(id)).count()
    }

    /// Copy an object with a fresh id, offset it, and select the copy.
    pub fn duplicate_object(&mut self, id: ObjectId) -> Option<ObjectId> {
        let offset = Vec2::new(self.config.paste_offset, self.config.paste_offset);
        let slide = self.current_slide_mut();
        let mut copy = slide.get_object(id)?.duplicate();
        copy.transform.translate(offset);
        copy.z_index = slide.next_z_index();
        let copy_id = copy.id;
        slide.add_object(copy);
        self.selection.select(copy_id);
        self.presentation.touch();
        Some(copy_id)
    }

    /// Duplicate every selected object and select the copies.
    pub fn duplicate_selected(&mut self) -> Vec<ObjectId> {
        let ids = self.selection.ids().to_vec();
        let copies: Vec<ObjectId> = ids
            .into_iter()
            .filter_map(|id| self.duplicate_object(id))
            .collect();
        if !copies.is_empty() {
            self.selection.set(copies.iter().copied());
        }
        copies
    }

    /// Shift an object within the paint order (positive is towards the front).
    pub fn move_object_z(&mut self, id: ObjectId, delta: i32) -> bool {
        if !self.current_slide_mut().move_object_z(id, delta) {
            return false;
        }
        self.presentation.touch();
        true
    }

    fn reorder_selected(&mut self, reorder: impl Fn(&mut Slide, ObjectId) -> bool) -> bool {
        let ids = self.selection.ids().to_vec();
        let slide = self.current_slide_mut();
        let mut moved = false;
        for id in ids {
            moved |= reorder(slide, id);
        }
        if moved {
            self.presentation.touch();
        }
        moved
    }

    /// Topmost visible object on the current slide at a document point.
    pub fn hit_test(&self, point: Point) -> Option<ObjectId> {
        self.current_slide().object_at_point(point)
    }

    // --- Selection ---

    /// Replace the selection. Ids not on the current slide are dropped.
    pub fn select_objects(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        let slide = &self.presentation.slides()[self.current_slide];
        self.selection
            .set(ids.into_iter().filter(|&id| slide.contains(id)));
    }

    pub fn select_all(&mut self) {
        let slide = &self.presentation.slides()[self.current_slide];
        self.selection.set(slide.objects.iter().map(|o| o.id));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn toggle_selection(&mut self, id: ObjectId) {
        if self.current_slide().contains(id) {
            self.selection.toggle(id);
        }
    }

    // --- Clipboard ---

    /// Copy the selected objects to the clipboard.
    pub fn copy(&mut self) -> usize {
        let slide = &self.presentation.slides()[self.current_slide];
        self.clipboard = self
            .selection
            .ids()
            .iter()
            .filter_map(|&id| slide.get_object(id))
            .cloned()
            .collect();
        self.clipboard.len()
    }

    /// Insert the clipboard contents into the current slide and select them.
    pub fn paste(&mut self) -> Vec<ObjectId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let offset = Vec2::new(self.config.paste_offset, self.config.paste_offset);
        let pasted: Vec<SlideObject> = self
            .clipboard
            .iter()
            .map(|object| {
                let mut copy = object.duplicate();
                copy.transform.translate(offset);
                copy
            })
            .collect();

        let slide = self.current_slide_mut();
        let mut ids = Vec::with_capacity(pasted.len());
        for mut object in pasted {
            object.z_index = slide.next_z_index();
            ids.push(object.id);
            slide.add_object(object);
        }
        self.selection.set(ids.iter().copied());
        self.presentation.touch();
        ids
    }

    /// Copy the selection to the clipboard, then delete it.
    pub fn cut(&mut self) -> usize {
        let copied = self.copy();
        if copied == 0 {
            return 0;
        }
        self.delete_selected();
        self.selection.clear();
        copied
    }

    // --- History ---

    /// Record the current presentation in history.
    pub fn commit(&mut self) {
        self.history.commit(&self.presentation);
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.presentation) {
            return false;
        }
        self.after_history_jump();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.presentation) {
            return false;
        }
        self.after_history_jump();
        true
    }

    fn after_history_jump(&mut self) {
        self.interaction = InteractionController::new();
        self.clamp_current_slide();
        let slide = &self.presentation.slides()[self.current_slide];
        self.selection.retain(|id| slide.contains(id));
    }

    // --- View ---

    pub fn set_zoom(&mut self, zoom: f64) {
        self.camera.set_zoom(zoom);
    }

    pub fn toggle_grid(&mut self) {
        self.grid.enabled = !self.grid.enabled;
    }

    pub fn set_grid_size(&mut self, size: f64) {
        self.grid.size = self.config.clamp_grid_size(size);
    }

    pub fn toggle_snap(&mut self) {
        self.grid.snap = !self.grid.snap;
    }

    pub fn add_guide(&mut self, orientation: GuideOrientation, position: f64) {
        self.guides.push(Guide {
            orientation,
            position,
        });
    }

    pub fn remove_guide(&mut self, index: usize) -> bool {
        if index >= self.guides.len() {
            return false;
        }
        self.guides.remove(index);
        true
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    // --- Pointer ---

    fn interaction_context(&self) -> InteractionContext {
        InteractionContext::new(self.presentation.settings.canvas_size(), self.camera.zoom)
            .with_grid(self.grid)
            .with_min_size(self.config.min_object_size)
    }

    /// Start dragging or resizing `target` from a screen position.
    pub fn pointer_down(
        &mut self,
        screen: Point,
        target: ObjectId,
        mode: InteractionMode,
        multi_select: bool,
    ) -> bool {
        let context = self.interaction_context();
        let slide = &self.presentation.slides()[self.current_slide];
        self.interaction.begin(
            slide,
            &mut self.selection,
            screen,
            target,
            mode,
            multi_select,
            context,
        )
    }

    /// Hit-test a screen position and start an interaction on whatever is
    /// there. Pressing on empty canvas without the modifier clears the
    /// selection.
    pub fn pointer_down_at(
        &mut self,
        screen: Point,
        mode: InteractionMode,
        multi_select: bool,
    ) -> Option<ObjectId> {
        let document_point = self.camera.screen_to_document(screen);
        let Some(target) = self.hit_test(document_point) else {
            if !multi_select {
                self.selection.clear();
            }
            return None;
        };
        self.pointer_down(screen, target, mode, multi_select)
            .then_some(target)
    }

    pub fn pointer_move(&mut self, screen: Point) -> bool {
        let slide = &mut self.presentation.slides_mut()[self.current_slide];
        self.interaction.update(slide, screen)
    }

    /// Finish the interaction and commit if anything moved.
    pub fn pointer_up(&mut self) -> Option<InteractionSummary> {
        let summary = self.interaction.end()?;
        if summary.changed {
            self.presentation.touch();
            self.commit();
        }
        Some(summary)
    }

    /// The pointer left the canvas or the window lost focus.
    pub fn pointer_leave(&mut self) -> Option<InteractionSummary> {
        self.pointer_up()
    }

    /// Abort the interaction and restore the objects it touched.
    pub fn cancel_interaction(&mut self) -> bool {
        let slide = &mut self.presentation.slides_mut()[self.current_slide];
        self.interaction.cancel(slide)
    }

    // --- Commands ---

    /// Run a command. Undoable commands that changed something are committed.
    ///
    /// Returns whether the command had any effect.
    pub fn execute(&mut self, command: &EditorCommand) -> bool {
        if command.is_undoable() {
            // Finish a drag first so it gets its own history entry.
            self.pointer_up();
        }
        let applied = match command {
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::Copy => self.copy() > 0,
            EditorCommand::Paste => !self.paste().is_empty(),
            EditorCommand::Cut => self.cut() > 0,
            EditorCommand::Duplicate => !self.duplicate_selected().is_empty(),
            EditorCommand::Delete => self.delete_selected() > 0,
            EditorCommand::SelectAll => {
                self.select_all();
                true
            }
            EditorCommand::ClearSelection => {
                self.clear_selection();
                true
            }
            EditorCommand::CancelInteraction => self.cancel_interaction(),
            EditorCommand::BringForward => self.reorder_selected(|s, id| s.move_object_z(id, 1)),
            EditorCommand::SendBackward => self.reorder_selected(|s, id| s.move_object_z(id, -1)),
            EditorCommand::BringToFront => self.reorder_selected(Slide::bring_to_front),
            EditorCommand::SendToBack => self.reorder_selected(Slide::send_to_back),
            EditorCommand::AddSlide => {
                self.add_slide(Some(self.current_slide + 1));
                true
            }
            EditorCommand::DuplicateSlide => self.duplicate_slide(self.current_slide).is_some(),
            EditorCommand::DeleteSlide => self.delete_slide(self.current_slide),
            EditorCommand::NextSlide => self.set_current_slide(self.current_slide + 1),
            EditorCommand::PreviousSlide => match self.current_slide.checked_sub(1) {
                Some(index) => self.set_current_slide(index),
                None => false,
            },
            EditorCommand::ZoomIn => {
                self.set_zoom(self.camera.zoom + ZOOM_STEP);
                true
            }
            EditorCommand::ZoomOut => {
                self.set_zoom(self.camera.zoom - ZOOM_STEP);
                true
            }
            EditorCommand::ResetZoom => {
                self.camera.reset();
                true
            }
            EditorCommand::SetZoom { zoom } => {
                self.set_zoom(*zoom);
                true
            }
            EditorCommand::ToggleGrid => {
                self.toggle_grid();
                true
            }
            EditorCommand::ToggleSnap => {
                self.toggle_snap();
                true
            }
            EditorCommand::SetGridSize { size } => {
                self.set_grid_size(*size);
                true
            }
            EditorCommand::SetMode { mode } => {
                self.set_mode(*mode);
                true
            }
            EditorCommand::AddGuide {
                orientation,
                position,
            } => {
                self.add_guide(*orientation, *position);
                true
            }
            EditorCommand::RemoveGuide { index } => self.remove_guide(*index),
        };

        if applied && command.is_undoable() {
            self.commit();
        }
        log::debug!("Executed {command:?} (applied: {applied})");
        applied
    }
}
