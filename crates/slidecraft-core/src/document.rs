//! Presentation document: slides, objects and metadata.

use crate::objects::{Gradient, ObjectId, SlideObject};
use kurbo::{Point, Size};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a slide.
pub type SlideId = Uuid;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Gradient,
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    /// Color, or URL for image/video backgrounds.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: "#ffffff".to_string(),
            gradient: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionEffect {
    #[default]
    Fade,
    SlideLeft,
    SlideRight,
    SlideUp,
    SlideDown,
    ZoomIn,
    ZoomOut,
    Flip,
    Dissolve,
    Wipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub effect: TransitionEffect,
    /// Milliseconds.
    pub duration: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            effect: TransitionEffect::Fade,
            duration: 500.0,
        }
    }
}

/// Background audio played while a slide is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideAudio {
    pub url: String,
    pub volume: f64,
    #[serde(default, rename = "loop")]
    pub looping: bool,
}

/// A single slide with its objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub name: String,
    /// Objects in insertion order; paint order comes from `z_index`.
    pub objects: Vec<SlideObject>,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub transition: Transition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<SlideAudio>,
    #[serde(default)]
    pub notes: String,
    /// Auto-advance duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Untitled Slide".to_string(),
            objects: Vec::new(),
            background: Background::default(),
            transition: Transition::default(),
            audio: None,
            notes: String::new(),
            duration: None,
        }
    }

    /// Add an object. Its `z_index` is left as given.
    pub fn add_object(&mut self, object: SlideObject) {
        self.objects.push(object);
    }

    /// Remove an object by ID.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SlideObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&SlideObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut SlideObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    /// The `z_index` a newly added object receives.
    pub fn next_z_index(&self) -> i32 {
        self.objects.len() as i32
    }

    /// Objects sorted back to front. Equal `z_index` keeps insertion order.
    pub fn objects_in_paint_order(&self) -> Vec<&SlideObject> {
        let mut ordered: Vec<&SlideObject> = self.objects.iter().collect();
        ordered.sort_by_key(|o| o.z_index);
        ordered
    }

    /// Topmost visible object under a document point.
    pub fn object_at_point(&self, point: Point) -> Option<ObjectId> {
        self.objects_in_paint_order()
            .into_iter()
            .rev()
            .find(|o| o.hit_test(point))
            .map(|o| o.id)
    }

    /// Move an object `delta` places within the object list, then renumber
    /// every `z_index` to its list position.
    /// Returns false if the object does not exist.
    pub fn move_object_z(&mut self, id: ObjectId, delta: i32) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        let last = self.objects.len() as i64 - 1;
        let target = (index as i64 + delta as i64).clamp(0, last) as usize;
        let object = self.objects.remove(index);
        self.objects.insert(target, object);
        self.renumber_z();
        true
    }

    /// Bring an object to the front (topmost).
    pub fn bring_to_front(&mut self, id: ObjectId) -> bool {
        self.move_object_z(id, i32::MAX)
    }

    /// Send an object to the back (bottommost).
    pub fn send_to_back(&mut self, id: ObjectId) -> bool {
        self.move_object_z(id, i32::MIN)
    }

    fn renumber_z(&mut self) {
        for (i, object) in self.objects.iter_mut().enumerate() {
            object.z_index = i as i32;
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub fonts: ThemeFonts,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default Theme".to_string(),
            fonts: ThemeFonts {
                heading: "Inter".to_string(),
                body: "Inter".to_string(),
            },
            colors: ThemeColors {
                primary: "#3b82f6".to_string(),
                secondary: "#8b5cf6".to_string(),
                accent: "#f59e0b".to_string(),
                background: "#ffffff".to_string(),
                text: "#1f2937".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "16:10")]
    Widescreen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSettings {
    /// Canvas width in document units.
    pub width: f64,
    /// Canvas height in document units.
    pub height: f64,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub auto_advance: bool,
    /// Milliseconds.
    #[serde(default = "default_auto_advance_delay")]
    pub auto_advance_delay: u64,
}

fn default_auto_advance_delay() -> u64 {
    5000
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            aspect_ratio: AspectRatio::Wide,
            auto_advance: false,
            auto_advance_delay: default_auto_advance_delay(),
        }
    }
}

impl PresentationSettings {
    pub fn canvas_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Value of a story variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub author: String,
    pub created_at: u64,
    pub updated_at: u64,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    1
}

/// A complete slide deck.
///
/// Always holds at least one slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_slides")]
    slides: Vec<Slide>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub settings: PresentationSettings,
    #[serde(default)]
    pub variables: BTreeMap<String, VariableValue>,
    pub metadata: Metadata,
}

/// A deck stored without slides gets one blank slide.
fn deserialize_slides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Slide>, D::Error> {
    let mut slides = Vec::<Slide>::deserialize(deserializer)?;
    if slides.is_empty() {
        slides.push(Slide::new());
    }
    Ok(slides)
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create a presentation with a single blank slide.
    pub fn new() -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            title: "Untitled Presentation".to_string(),
            description: String::new(),
            slides: vec![Slide::new()],
            theme: Theme::default(),
            settings: PresentationSettings::default(),
            variables: BTreeMap::new(),
            metadata: Metadata {
                author: String::new(),
                created_at: now,
                updated_at: now,
                version: 1,
            },
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Mutable access to the slides. The slice cannot change the slide count.
    pub fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Insert a blank slide at `index` (clamped to the end).
    /// Returns the index it landed at.
    pub fn add_slide(&mut self, index: Option<usize>) -> usize {
        let at = index.unwrap_or(self.slides.len()).min(self.slides.len());
        self.slides.insert(at, Slide::new());
        self.touch();
        at
    }

    /// Deep copy the slide at `index` and insert it right after.
    /// Returns the index of the copy.
    pub fn duplicate_slide(&mut self, index: usize) -> Option<usize> {
        let source = self.slides.get(index)?;
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        copy.name = format!("{} (Copy)", source.name);
        copy.objects = source.objects.iter().map(SlideObject::duplicate).collect();
        self.slides.insert(index + 1, copy);
        self.touch();
        Some(index + 1)
    }

    /// Delete a slide. Refused when it is the only slide or out of range.
    pub fn delete_slide(&mut self, index: usize) -> bool {
        if self.slides.len() <= 1 || index >= self.slides.len() {
            return false;
        }
        self.slides.remove(index);
        self.touch();
        true
    }

    /// Move a slide from one position to another. Both must be in range.
    pub fn move_slide(&mut self, from: usize, to: usize) -> bool {
        let len = self.slides.len();
        if from >= len || to >= len {
            return false;
        }
        let slide = self.slides.remove(from);
        self.slides.insert(to, slide);
        self.touch();
        true
    }

    /// Record a modification time.
    pub fn touch(&mut self) {
        self.metadata.updated_at = now_millis();
    }

    /// Total number of objects across all slides.
    pub fn object_count(&self) -> usize {
        self.slides.iter().map(Slide::len).sum()
    }

    /// Serialize the presentation to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a presentation from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
