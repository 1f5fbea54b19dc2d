// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node contract shared by every member of the tree, and the handles that name nodes.

use core::sync::atomic::{AtomicU32, Ordering};

use kurbo::{Point, Rect};
use lamina_event::Message;
use lamina_render::RenderContext;

use crate::Layer;

/// Identifier of a [`Layer`] instance.
///
/// Children hold one of these as a non-owning back-reference to the layer that owns them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

impl LayerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle of a child within the layer that owns it.
///
/// Serials are never reused within a layer, and the owning [`LayerId`] is part of the handle,
/// so a handle from another layer (or a removed child) never matches a live entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChildId {
    layer: LayerId,
    serial: u32,
}

impl ChildId {
    pub(crate) const fn new(layer: LayerId, serial: u32) -> Self {
        Self { layer, serial }
    }

    /// The layer this handle belongs to.
    pub const fn layer(self) -> LayerId {
        self.layer
    }
}

/// Whether a node captured a message.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Capture {
    /// The node handled the message and claims input focus.
    Captured,
    /// The node did not handle the message; keep offering it to siblings.
    #[default]
    Passed,
}

impl Capture {
    /// `true` for [`Capture::Captured`].
    pub const fn is_captured(self) -> bool {
        matches!(self, Self::Captured)
    }
}

impl From<bool> for Capture {
    fn from(captured: bool) -> Self {
        if captured {
            Self::Captured
        } else {
            Self::Passed
        }
    }
}

/// A node in the layer tree.
///
/// Only the placement accessors are required. Everything else defaults to doing nothing, so a
/// plain node just carries a rect.
///
/// Rects are expressed in the coordinate space of the owning layer: the origin is the node's
/// position relative to the layer's origin.
pub trait Child {
    /// Current placement (position and size) in the owner's space.
    fn rect(&self) -> Rect;

    /// Replace the placement.
    fn set_rect(&mut self, rect: Rect);

    /// Move the node without resizing it.
    fn set_origin(&mut self, origin: Point) {
        let rect = self.rect().with_origin(origin);
        self.set_rect(rect);
    }

    /// Disabled nodes are skipped by draw, update, and event dispatch.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Record (or clear, with `None`) the layer that owns this node.
    fn attach(&mut self, _owner: Option<LayerId>) {}

    /// One-time initialization, called by [`Layer::add`] right before the node joins the
    /// sequence.
    fn init(&mut self) {}

    /// Render this node (and, for containers, its descendants).
    fn draw(&self, _ctx: &mut dyn RenderContext) {}

    /// Handle a message whose position, if any, is in the owner's space.
    fn on_event(&mut self, _msg: &Message) -> Capture {
        Capture::Passed
    }

    /// Advance per-tick state.
    fn update(&mut self) {}

    /// Container access for nodes that are layers.
    fn as_layer_mut(&mut self) -> Option<&mut Layer> {
        None
    }
}
