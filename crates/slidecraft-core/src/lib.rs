//! SlideCraft Core Library
//!
//! Platform-agnostic presentation model, canvas interaction and undo
//! history for the SlideCraft slide editor.

pub mod camera;
pub mod config;
pub mod document;
pub mod editor;
pub mod history;
pub mod interaction;
pub mod objects;
pub mod selection;
pub mod snap;
pub mod storage;

pub use camera::Camera;
pub use config::{ConfigError, EditorConfig};
pub use document::{Presentation, Slide, SlideId};
pub use editor::{EditorCommand, EditorMode, EditorSession, Guide, GuideOrientation};
pub use history::{DEFAULT_HISTORY_CAPACITY, History};
pub use interaction::{
    InteractionContext, InteractionController, InteractionMode, InteractionSummary, MIN_OBJECT_SIZE,
};
pub use objects::{ObjectId, ObjectKind, SlideObject, Transform};
pub use selection::Selection;
pub use snap::{GRID_SIZE, GridSettings, snap_value};
pub use storage::{MemoryStorage, Storage, StorageError, StorageResult};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
