// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Message`] envelope and its tags.

use alloc::rc::Rc;
use core::any::Any;

use kurbo::{Point, Rect};

/// Callback invoked by [`Message::complete`].
pub type Completion = Rc<dyn Fn(&Message)>;

/// Kind of input a [`Message`] describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A pointer button was pressed.
    PointerDown,
    /// A pointer button was released.
    PointerUp,
    /// The pointer moved.
    PointerMove,
    /// A press and release were recognized as a click by the host.
    Click,
    /// Scroll wheel or trackpad scroll.
    Wheel,
    /// A key was pressed.
    KeyDown,
    /// A key was released.
    KeyUp,
    /// Committed text input.
    Text,
    /// Application-defined kind. The host owns the meaning of the tag.
    Custom(u32),
}

impl EventKind {
    /// Whether this kind is positional (carries a pointer location).
    pub const fn is_pointer(self) -> bool {
        matches!(
            self,
            Self::PointerDown | Self::PointerUp | Self::PointerMove | Self::Click | Self::Wheel
        )
    }
}

/// Handle naming whatever produced a [`Message`] (a device, a widget, a synthetic source).
///
/// The host is responsible for the meaning and lifecycle of individual values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(pub u64);

/// One input occurrence.
///
/// Cloning is cheap: the payload and completion callback are reference counted, so a clone
/// refers to the same payload and callback as the original.
#[derive(Clone)]
pub struct Message {
    kind: EventKind,
    source: Option<SourceId>,
    position: Option<Point>,
    payload: Option<Rc<dyn Any>>,
    on_complete: Option<Completion>,
}

impl core::fmt::Debug for Message {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Message")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .field("position", &self.position)
            .field("has_payload", &self.payload.is_some())
            .field("has_completion", &self.on_complete.is_some())
            .finish()
    }
}

impl Message {
    /// Create a message of the given kind with no position, source, payload, or callback.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            source: None,
            position: None,
            payload: None,
            on_complete: None,
        }
    }

    /// Create a positional message.
    pub fn pointer(kind: EventKind, position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::new(kind)
        }
    }

    /// Attach the originator handle.
    pub fn with_source(mut self, source: SourceId) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach an opaque payload, retrievable with [`Message::payload`].
    pub fn with_payload<T: Any>(mut self, payload: T) -> Self {
        self.payload = Some(Rc::new(payload));
        self
    }

    /// Attach a completion callback.
    pub fn on_complete(mut self, callback: impl Fn(&Self) + 'static) -> Self {
        self.on_complete = Some(Rc::new(callback));
        self
    }

    /// The kind tag.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The originator, if one was recorded.
    pub fn source(&self) -> Option<SourceId> {
        self.source
    }

    /// Position in the coordinate space of the current receiver.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Borrow the payload if it is a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }

    /// Whether this is a pointer (mouse) message.
    pub fn is_pointer(&self) -> bool {
        self.kind.is_pointer()
    }

    /// Copy of this message with its position expressed relative to `origin`.
    ///
    /// All other fields are shared with the original. Messages without a position are copied
    /// unchanged.
    #[must_use]
    pub fn relative_to(&self, origin: Point) -> Self {
        Self {
            position: self.position.map(|p| p - origin.to_vec2()),
            ..self.clone()
        }
    }

    /// Whether a receiver occupying `rect` is hit by this message.
    ///
    /// Non-pointer messages hit everything; pointer messages hit when their position lies
    /// inside `rect` (a pointer message without a position also hits).
    pub fn hits(&self, rect: Rect) -> bool {
        !self.is_pointer() || self.position.is_none_or(|p| rect.contains(p))
    }

    /// Invoke the completion callback, if any.
    pub fn complete(&self) {
        if let Some(callback) = &self.on_complete {
            callback(self);
        }
    }
}
