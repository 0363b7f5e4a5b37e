//! Group object.

use super::SlideObject;
use serde::{Deserialize, Serialize};

/// A container of child objects.
///
/// Children keep their own transforms in slide coordinates. Dragging the
/// group changes the group's transform only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub children: Vec<SlideObject>,
}

impl Group {
    pub fn new(children: Vec<SlideObject>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
