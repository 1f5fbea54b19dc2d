// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Render: the drawing seam used by the layer tree.
//!
//! The layer tree only needs a handful of operations from a renderer: scoped save/restore of
//! the drawing origin, translation, and solid fills (for the popup scrim). [`RenderContext`]
//! names exactly those, so any canvas, GPU scene builder, or software rasterizer can sit
//! behind it.
//!
//! [`Recorder`] is a ready-made implementation that appends [`DrawCommand`]s to a display
//! list. It is useful for tests, for debugging paint order, and as an intermediate format a
//! real backend can replay.
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use lamina_render::{Color, DrawCommand, Recorder, RenderContext};
//!
//! let mut rec = Recorder::new();
//! rec.save();
//! rec.translate(Vec2::new(10.0, 10.0));
//! rec.set_fill(Color::BLACK);
//! rec.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
//! rec.restore();
//!
//! assert_eq!(rec.fills().next(), Some(Rect::new(10.0, 10.0, 15.0, 15.0)));
//! assert_eq!(rec.depth(), 0);
//! assert!(matches!(rec.commands()[0], DrawCommand::Save));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod recorder;

pub use color::Color;
pub use recorder::{DrawCommand, Recorder};

use kurbo::{Rect, Vec2};

/// Drawing operations the layer tree relies on.
///
/// Coordinates passed to [`RenderContext::fill_rect`] are in the current local space, i.e.
/// after every active [`RenderContext::translate`].
pub trait RenderContext {
    /// Push the current drawing state (origin and fill).
    fn save(&mut self);

    /// Pop the most recently saved drawing state.
    fn restore(&mut self);

    /// Move the drawing origin by `offset`.
    fn translate(&mut self, offset: Vec2);

    /// Set the color used by subsequent fills.
    fn set_fill(&mut self, color: Color);

    /// Fill `rect` with the current fill color.
    fn fill_rect(&mut self, rect: Rect);
}
