//! Pointer-driven move and resize of slide objects.
//!
//! The controller records the starting transform of every affected object
//! when a drag begins and recomputes positions from those originals on each
//! pointer move. The result of a drag therefore only depends on the last
//! pointer position. It never writes history; the editor commits after
//! [`InteractionController::end`].

use crate::document::Slide;
use crate::objects::{ObjectId, Transform};
use crate::selection::Selection;
use crate::snap::GridSettings;
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest width/height a resize may produce.
pub const MIN_OBJECT_SIZE: f64 = 50.0;

/// What a drag does to its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Translate the object (or the whole selection).
    Move,
    /// Grow/shrink the anchor object from its bottom-right corner.
    Resize,
}

/// Canvas parameters captured when an interaction starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionContext {
    /// Canvas size in document units; objects are clamped inside it.
    pub canvas: Size,
    /// View zoom used to convert pointer deltas into document units.
    pub zoom: f64,
    pub grid: GridSettings,
    pub min_size: f64,
}

impl InteractionContext {
    /// Context with snapping off and the default minimum size.
    pub fn new(canvas: Size, zoom: f64) -> Self {
        Self {
            canvas,
            zoom,
            grid: GridSettings::disabled(),
            min_size: MIN_OBJECT_SIZE,
        }
    }

    pub fn with_grid(mut self, grid: GridSettings) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }
}

/// State of a drag in progress.
#[derive(Debug, Clone)]
pub struct ActiveInteraction {
    pub mode: InteractionMode,
    /// The object the pointer went down on.
    pub anchor_id: ObjectId,
    /// Pointer position at pointer-down.
    pub start_point: Point,
    /// Latest pointer position.
    pub current_point: Point,
    pub context: InteractionContext,
    /// Transforms at pointer-down, in selection order.
    pub original_transforms: Vec<(ObjectId, Transform)>,
    changed: bool,
}

impl ActiveInteraction {
    /// Pointer travel converted to document units.
    pub fn delta(&self) -> Vec2 {
        (self.current_point - self.start_point) / self.context.zoom
    }

    /// The objects this interaction mutates.
    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.original_transforms.iter().map(|(id, _)| *id).collect()
    }

    fn apply(&self, start: &Transform) -> Transform {
        let delta = self.delta();
        match self.mode {
            InteractionMode::Move => moved(start, delta, &self.context),
            InteractionMode::Resize => resized(start, delta, &self.context),
        }
    }
}

/// What an interaction did, reported when it ends.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSummary {
    pub mode: InteractionMode,
    pub anchor_id: ObjectId,
    pub object_ids: Vec<ObjectId>,
    /// False when the pointer came back to where it started (or never moved).
    pub changed: bool,
}

/// Translates pointer events into transform changes on one slide.
///
/// Only one interaction may be active at a time.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    active: Option<ActiveInteraction>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveInteraction> {
        self.active.as_ref()
    }

    /// Start a move or resize on `target`.
    ///
    /// The target becomes selected: it replaces the selection, or is added
    /// to it when `multi_select` is set. A target that is already selected
    /// keeps the current selection so the group can be dragged together.
    ///
    /// Returns false (and changes nothing) when an interaction is already
    /// active, the target is not on the slide, or it is locked.
    pub fn begin(
        &mut self,
        slide: &Slide,
        selection: &mut Selection,
        pointer: Point,
        target: ObjectId,
        mode: InteractionMode,
        multi_select: bool,
        context: InteractionContext,
    ) -> bool {
        if self.active.is_some() {
            log::debug!("Ignoring pointer down on {target}: interaction already active");
            return false;
        }
        let Some(object) = slide.get_object(target) else {
            return false;
        };
        if object.locked {
            log::debug!("Ignoring pointer down on locked object {target}");
            return false;
        }

        if multi_select {
            selection.add(target);
        } else if !selection.contains(target) {
            selection.select(target);
        }

        let original_transforms = if mode == InteractionMode::Move && selection.len() > 1 {
            selection
                .ids()
                .iter()
                .filter_map(|&id| slide.get_object(id))
                .filter(|o| o.is_editable())
                .map(|o| (o.id, o.transform))
                .collect()
        } else {
            vec![(target, object.transform)]
        };

        log::debug!(
            "Begin {:?} on {} ({} object(s)) at zoom {}",
            mode,
            target,
            original_transforms.len(),
            context.zoom
        );

        self.active = Some(ActiveInteraction {
            mode,
            anchor_id: target,
            start_point: pointer,
            current_point: pointer,
            context,
            original_transforms,
            changed: false,
        });
        true
    }

    /// Apply the pointer position to every affected object.
    ///
    /// Returns false if no interaction is active.
    pub fn update(&mut self, slide: &mut Slide, pointer: Point) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.current_point = pointer;

        let mut changed = false;
        for (id, start) in &active.original_transforms {
            let Some(object) = slide.get_object_mut(*id) else {
                continue;
            };
            if object.locked {
                continue;
            }
            let next = active.apply(start);
            object.transform = next;
            changed |= next != *start;
        }
        active.changed = changed;
        true
    }

    /// Finish the interaction, keeping the applied transforms.
    pub fn end(&mut self) -> Option<InteractionSummary> {
        let active = self.active.take()?;
        let summary = InteractionSummary {
            mode: active.mode,
            anchor_id: active.anchor_id,
            object_ids: active.object_ids(),
            changed: active.changed,
        };
        log::debug!(
            "End {:?} on {} (changed: {})",
            summary.mode,
            summary.anchor_id,
            summary.changed
        );
        Some(summary)
    }

    /// Abort the interaction and put every affected object back.
    ///
    /// Returns false if no interaction was active.
    pub fn cancel(&mut self, slide: &mut Slide) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        for (id, start) in &active.original_transforms {
            if let Some(object) = slide.get_object_mut(*id) {
                object.transform = *start;
            }
        }
        log::debug!("Cancelled {:?} on {}", active.mode, active.anchor_id);
        true
    }
}

/// Clamp to `[0, max]`; when `max` is negative the lower bound wins.
fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

fn moved(start: &Transform, delta: Vec2, ctx: &InteractionContext) -> Transform {
    let mut next = *start;
    next.x = clamp_axis(ctx.grid.snap_value(start.x + delta.x), ctx.canvas.width - start.width);
    next.y = clamp_axis(ctx.grid.snap_value(start.y + delta.y), ctx.canvas.height - start.height);
    next
}

fn resized(start: &Transform, delta: Vec2, ctx: &InteractionContext) -> Transform {
    // Room to the right/bottom edge. Closer to the edge than the minimum
    // size, the edge wins; an object already outside keeps its start size.
    let max_width = (ctx.canvas.width - start.x).max(start.width.min(ctx.min_size));
    let max_height = (ctx.canvas.height - start.y).max(start.height.min(ctx.min_size));

    let mut next = *start;
    next.width = ctx
        .grid
        .snap_value(start.width + delta.x)
        .max(ctx.min_size)
        .min(max_width);
    next.height = ctx
        .grid
        .snap_value(start.height + delta.y)
        .max(ctx.min_size)
        .min(max_height);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::SlideObject;

    const CANVAS: Size = Size::new(1920.0, 1080.0);

    fn slide_with(transforms: &[Transform]) -> (Slide, Vec<ObjectId>) {
        let mut slide = Slide::new();
        let mut ids = Vec::new();
        for t in transforms {
            let obj = SlideObject::text("x", *t);
            ids.push(obj.id);
            slide.add_object(obj);
        }
        (slide, ids)
    }

    fn transform_of(slide: &Slide, id: ObjectId) -> Transform {
        slide.get_object(id).unwrap().transform
    }

    #[test]
    fn test_move_single_object() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();

        assert!(ctl.begin(
            &slide,
            &mut sel,
            Point::new(100.0, 100.0),
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        ));
        assert_eq!(sel.ids(), &[ids[0]]);
        assert!(ctl.update(&mut slide, Point::new(150.0, 130.0)));
        let summary = ctl.end().unwrap();

        assert!(summary.changed);
        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(150.0, 130.0));
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_zoom_scales_delta() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();

        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 2.0),
        );
        ctl.update(&mut slide, Point::new(50.0, 30.0));
        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(125.0, 115.0));
    }

    #[test]
    fn test_final_position_ignores_intermediate_moves() {
        let start = Transform::new(100.0, 100.0, 200.0, 100.0);
        let ctx = InteractionContext::new(CANVAS, 1.5).with_grid(GridSettings::snapping(20.0));

        let run = |path: &[Point]| {
            let (mut slide, ids) = slide_with(&[start]);
            let mut sel = Selection::new();
            let mut ctl = InteractionController::new();
            ctl.begin(&slide, &mut sel, Point::ZERO, ids[0], InteractionMode::Move, false, ctx);
            for p in path {
                ctl.update(&mut slide, *p);
            }
            ctl.end();
            transform_of(&slide, ids[0])
        };

        let direct = run(&[Point::new(77.0, -31.0)]);
        let wandering = run(&[
            Point::new(5000.0, 5000.0),
            Point::new(-300.0, 12.0),
            Point::new(3.0, 3.0),
            Point::new(77.0, -31.0),
        ]);
        assert_eq!(direct, wandering);
    }

    #[test]
    fn test_move_clamps_to_canvas() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );

        ctl.update(&mut slide, Point::new(-500.0, 5000.0));
        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(0.0, 980.0));
        ctl.update(&mut slide, Point::new(5000.0, -500.0));
        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(1720.0, 0.0));
    }

    #[test]
    fn test_oversized_object_pins_to_origin() {
        let (mut slide, ids) = slide_with(&[Transform::new(0.0, 0.0, 3000.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(40.0, 0.0));
        assert_eq!(transform_of(&slide, ids[0]).x, 0.0);
    }

    #[test]
    fn test_grid_snap_before_clamp() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::new(100.0, 100.0),
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0).with_grid(GridSettings::snapping(20.0)),
        );
        ctl.update(&mut slide, Point::new(113.0, 107.0));
        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(120.0, 100.0));
    }

    #[test]
    fn test_multi_move_applies_same_delta() {
        let (mut slide, ids) = slide_with(&[
            Transform::new(100.0, 100.0, 100.0, 100.0),
            Transform::new(400.0, 300.0, 100.0, 100.0),
        ]);
        let mut sel = Selection::new();
        sel.set([ids[0], ids[1]]);
        let mut ctl = InteractionController::new();

        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[1],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        assert_eq!(sel.len(), 2);
        ctl.update(&mut slide, Point::new(10.0, -20.0));

        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(110.0, 80.0));
        assert_eq!(transform_of(&slide, ids[1]).position(), Point::new(410.0, 280.0));
    }

    #[test]
    fn test_multi_move_clamps_each_object_independently() {
        let (mut slide, ids) = slide_with(&[
            Transform::new(10.0, 500.0, 100.0, 100.0),
            Transform::new(400.0, 500.0, 100.0, 100.0),
        ]);
        let mut sel = Selection::new();
        sel.set([ids[0], ids[1]]);
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(-50.0, 0.0));

        assert_eq!(transform_of(&slide, ids[0]).x, 0.0);
        assert_eq!(transform_of(&slide, ids[1]).x, 350.0);
    }

    #[test]
    fn test_multi_select_modifier_adds_to_selection() {
        let (slide, ids) = slide_with(&[Transform::default(), Transform::default()]);
        let mut sel = Selection::new();
        sel.select(ids[0]);
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[1],
            InteractionMode::Move,
            true,
            InteractionContext::new(CANVAS, 1.0),
        );
        assert_eq!(sel.ids(), &[ids[0], ids[1]]);
        assert_eq!(ctl.active().unwrap().object_ids().len(), 2);
    }

    #[test]
    fn test_click_outside_selection_replaces_it() {
        let (slide, ids) = slide_with(&[Transform::default(), Transform::default(), Transform::default()]);
        let mut sel = Selection::new();
        sel.set([ids[0], ids[1]]);
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[2],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        assert_eq!(sel.ids(), &[ids[2]]);
    }

    #[test]
    fn test_locked_target_does_not_start() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 100.0, 100.0)]);
        slide.get_object_mut(ids[0]).unwrap().locked = true;
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();

        assert!(!ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        ));
        assert!(!ctl.is_active());
        assert!(sel.is_empty());
        assert!(!ctl.update(&mut slide, Point::new(50.0, 50.0)));
        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_locked_member_of_selection_stays_put() {
        let (mut slide, ids) = slide_with(&[
            Transform::new(100.0, 100.0, 100.0, 100.0),
            Transform::new(300.0, 100.0, 100.0, 100.0),
        ]);
        slide.get_object_mut(ids[1]).unwrap().locked = true;
        let mut sel = Selection::new();
        sel.set([ids[0], ids[1]]);
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(25.0, 25.0));

        assert_eq!(transform_of(&slide, ids[0]).position(), Point::new(125.0, 125.0));
        assert_eq!(transform_of(&slide, ids[1]).position(), Point::new(300.0, 100.0));
    }

    #[test]
    fn test_unknown_target_does_not_start() {
        let (slide, _) = slide_with(&[Transform::default()]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        assert!(!ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            uuid::Uuid::new_v4(),
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        ));
        assert!(ctl.end().is_none());
    }

    #[test]
    fn test_second_begin_is_refused() {
        let (slide, ids) = slide_with(&[Transform::default(), Transform::default()]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        let ctx = InteractionContext::new(CANVAS, 1.0);
        assert!(ctl.begin(&slide, &mut sel, Point::ZERO, ids[0], InteractionMode::Move, false, ctx));
        assert!(!ctl.begin(&slide, &mut sel, Point::ZERO, ids[1], InteractionMode::Move, false, ctx));
        assert_eq!(ctl.active().unwrap().anchor_id, ids[0]);
    }

    #[test]
    fn test_resize_clamps_to_right_edge() {
        let (mut slide, ids) = slide_with(&[Transform::new(1000.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Resize,
            false,
            InteractionContext::new(Size::new(1080.0, 1080.0), 1.0),
        );
        ctl.update(&mut slide, Point::new(100.0, 0.0));
        let t = transform_of(&slide, ids[0]);
        assert_eq!(t.width, 80.0);
        assert_eq!(t.height, 100.0);
        assert_eq!(t.position(), Point::new(1000.0, 100.0));
    }

    #[test]
    fn test_resize_respects_min_size() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Resize,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(-10_000.0, -10_000.0));
        let t = transform_of(&slide, ids[0]);
        assert_eq!(t.width, MIN_OBJECT_SIZE);
        assert_eq!(t.height, MIN_OBJECT_SIZE);
    }

    fn resize_to(start: Transform, canvas: Size, pointer: Point) -> Transform {
        let (mut slide, ids) = slide_with(&[start]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Resize,
            false,
            InteractionContext::new(canvas, 1.0),
        );
        ctl.update(&mut slide, pointer);
        transform_of(&slide, ids[0])
    }

    #[test]
    fn test_resize_near_edge_never_crosses_it() {
        let canvas = Size::new(1080.0, 1080.0);
        let start = Transform::new(1040.0, 1050.0, 40.0, 30.0);
        for pointer in [Point::new(5.0, 5.0), Point::new(500.0, 500.0), Point::new(-500.0, -500.0)] {
            let t = resize_to(start, canvas, pointer);
            assert_eq!(t.size(), Size::new(40.0, 30.0));
            assert!(t.x + t.width <= 1080.0 && t.y + t.height <= 1080.0);
        }
    }

    #[test]
    fn test_resize_undersized_object_grows_to_min_size() {
        let t = resize_to(Transform::new(100.0, 100.0, 30.0, 20.0), CANVAS, Point::new(1.0, 1.0));
        assert_eq!(t.size(), Size::new(MIN_OBJECT_SIZE, MIN_OBJECT_SIZE));
    }

    #[test]
    fn test_resize_object_past_edge_keeps_start_size() {
        let start = Transform::new(1060.0, 100.0, 40.0, 100.0);
        let t = resize_to(start, Size::new(1080.0, 1080.0), Point::new(100.0, 0.0));
        assert_eq!(t.width, 40.0);
    }

    #[test]
    fn test_resize_snaps_size() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 200.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Resize,
            false,
            InteractionContext::new(CANVAS, 1.0).with_grid(GridSettings::snapping(20.0)),
        );
        ctl.update(&mut slide, Point::new(9.0, 31.0));
        let t = transform_of(&slide, ids[0]);
        assert_eq!(t.width, 200.0);
        assert_eq!(t.height, 140.0);
    }

    #[test]
    fn test_resize_only_touches_anchor() {
        let (mut slide, ids) = slide_with(&[
            Transform::new(100.0, 100.0, 100.0, 100.0),
            Transform::new(400.0, 100.0, 100.0, 100.0),
        ]);
        let mut sel = Selection::new();
        sel.set([ids[0], ids[1]]);
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Resize,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(40.0, 40.0));

        assert_eq!(transform_of(&slide, ids[0]).size(), Size::new(140.0, 140.0));
        assert_eq!(transform_of(&slide, ids[1]).size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_returning_to_start_reports_no_change() {
        let (mut slide, ids) = slide_with(&[Transform::new(100.0, 100.0, 100.0, 100.0)]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(60.0, 60.0));
        ctl.update(&mut slide, Point::ZERO);
        assert!(!ctl.end().unwrap().changed);
    }

    #[test]
    fn test_cancel_restores_start_transforms() {
        let start = Transform::new(100.0, 100.0, 100.0, 100.0);
        let (mut slide, ids) = slide_with(&[start]);
        let mut sel = Selection::new();
        let mut ctl = InteractionController::new();
        ctl.begin(
            &slide,
            &mut sel,
            Point::ZERO,
            ids[0],
            InteractionMode::Move,
            false,
            InteractionContext::new(CANVAS, 1.0),
        );
        ctl.update(&mut slide, Point::new(300.0, 300.0));
        assert!(ctl.cancel(&mut slide));
        assert_eq!(transform_of(&slide, ids[0]), start);
        assert!(!ctl.is_active());
        assert!(!ctl.cancel(&mut slide));
    }
}
