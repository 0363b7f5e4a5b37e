//! Slide object definitions.

mod animation;
mod data;
mod group;
mod media;
mod shape;
mod text;

pub use animation::{Animation, AnimationEffect, AnimationKeyframe, AnimationType, Easing, KeyframeProperties, Trigger};
pub use data::{Chart, ChartPoint, ChartType, Table, TableStyle};
pub use group::Group;
pub use media::{Audio, Crop, Embed, Image, ImageFilters, Video};
pub use shape::{Gradient, GradientKind, GradientStop, Shadow, Shape, ShapeStyle, ShapeType};
pub use text::{FontStyle, FontWeight, FontWeightKeyword, Text, TextAlign, TextDecoration, TextStyle};

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a slide object.
pub type ObjectId = Uuid;

/// Position, size, rotation and scale of an object in document coordinates.
///
/// Zoom is never stored here; renderers multiply by the camera zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, clockwise, around the center.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

impl Transform {
    /// Create an unrotated, unscaled transform.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Unrotated layout box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Translate by a document-space offset.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Check whether a document point lies inside the painted box.
    ///
    /// Rotation and scale are applied around the center, matching how the
    /// box is painted.
    pub fn contains(&self, point: Point) -> bool {
        let center = self.center();
        let (sin, cos) = (-self.rotation.to_radians()).sin_cos();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let local_x = dx * cos - dy * sin;
        let local_y = dx * sin + dy * cos;
        let half_w = self.width * self.scale_x.abs() / 2.0;
        let half_h = self.height * self.scale_y.abs() / 2.0;
        local_x.abs() <= half_w && local_y.abs() <= half_h
    }
}

/// Variant-specific object payload.
///
/// Serialized with an internal `"type"` tag next to the common fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Text(Text),
    Shape(Shape),
    Image(Image),
    Video(Video),
    Audio(Audio),
    Table(Table),
    Chart(Chart),
    Group(Group),
    Embed(Embed),
}

impl ObjectKind {
    /// Human-readable type name, used for default object names.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Text(_) => "Text",
            ObjectKind::Shape(_) => "Shape",
            ObjectKind::Image(_) => "Image",
            ObjectKind::Video(_) => "Video",
            ObjectKind::Audio(_) => "Audio",
            ObjectKind::Table(_) => "Table",
            ObjectKind::Chart(_) => "Chart",
            ObjectKind::Group(_) => "Group",
            ObjectKind::Embed(_) => "Embed",
        }
    }
}

/// An object placed on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideObject {
    pub id: ObjectId,
    pub name: String,
    pub transform: Transform,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Paint order; lower values paint first.
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub animations: Vec<Animation>,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

fn default_opacity() -> f64 {
    1.0
}

impl SlideObject {
    /// Create a visible, unlocked object with a fresh id.
    pub fn new(kind: ObjectKind, transform: Transform) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: kind.label().to_string(),
            transform,
            locked: false,
            hidden: false,
            opacity: 1.0,
            z_index: 0,
            animations: Vec::new(),
            kind,
        }
    }

    pub fn text(content: impl Into<String>, transform: Transform) -> Self {
        Self::new(ObjectKind::Text(Text::new(content)), transform)
    }

    pub fn shape(shape_type: ShapeType, transform: Transform) -> Self {
        Self::new(ObjectKind::Shape(Shape::new(shape_type)), transform)
    }

    pub fn image(url: impl Into<String>, transform: Transform) -> Self {
        Self::new(ObjectKind::Image(Image::new(url)), transform)
    }

    /// Builder-style name override.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Deep copy with fresh ids (group children included).
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.refresh_ids();
        copy
    }

    fn refresh_ids(&mut self) {
        self.id = Uuid::new_v4();
        if let ObjectKind::Group(group) = &mut self.kind {
            for child in &mut group.children {
                child.refresh_ids();
            }
        }
    }

    /// Whether interaction may change this object.
    pub fn is_editable(&self) -> bool {
        !self.locked
    }

    /// Hit test in document coordinates. Hidden objects never hit.
    pub fn hit_test(&self, point: Point) -> bool {
        !self.hidden && self.transform.contains(point)
    }
}
