//! Draw commands handed to the rendering backend.

use serde::Serialize;

use crate::sprite_type::ImageId;

/// A single draw command for one visible sprite in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderItem {
    /// Image to draw.
    pub image: ImageId,
    /// Screen-space left edge.
    pub x: i32,
    /// Screen-space top edge.
    pub y: i32,
    /// Draw order; higher is drawn later.
    pub z: i32,
    /// Opacity, 0 to 255.
    pub alpha: u8,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Rotation in radians.
    pub rotation: f32,
}

/// Sink accepting draw commands for the current frame.
#[cfg_attr(test, mockall::automock)]
pub trait RenderQueue {
    /// Appends `item` after everything queued so far.
    fn push(&mut self, item: RenderItem);
}

/// Render queue backed by a `Vec`, cleared by the caller between frames.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RenderList {
    items: Vec<RenderItem>,
}

impl RenderList {
    /// Items queued so far, in submission order.
    #[must_use]
    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    /// Number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the list ahead of the next frame.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl RenderQueue for RenderList {
    fn push(&mut self, item: RenderItem) {
        self.items.push(item);
    }
}
