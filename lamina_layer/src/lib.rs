// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Layer: a retained-mode layer tree for 2D canvas UIs.
//!
//! A [`Layer`] is a container node that owns an ordered sequence of [`Child`] nodes. Layers
//! nest (a layer is itself a child), and the whole tree is driven by three synchronous calls
//! made once per tick or input by the host:
//!
//! - [`Child::update`]: advance per-tick state,
//! - [`Child::draw`]: render into a [`RenderContext`](lamina_render::RenderContext),
//! - [`Child::on_event`]: route a [`Message`](lamina_event::Message) down the tree.
//!
//! ## Ordering and focus
//!
//! The child sequence is both the draw order (index-ascending) and the focus-priority order.
//! When a child reports [`Capture::Captured`] for a message, its layer moves it to index 0
//! and stops offering the message to later siblings. The next message is therefore offered
//! to the most recently focused child first.
//!
//! ## Layout
//!
//! A layer may carry a [`Layout`] strategy: a horizontal strip, a vertical strip, or bounded
//! alignment. Strategies are pure functions of the child, its previous sibling, per-child
//! [`AddOptions`], and a [`LayoutEnv`] holding the container's spacing and bounds. Positions
//! are derived when a child is added and re-derived for every child after a removal.
//!
//! ## Popups
//!
//! Each layer has a single popup slot. While a popup is shown it is drawn above a scrim,
//! receives every message that reaches the layer, and is the only node updated. Adding,
//! removing, or clearing children closes the popup.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use lamina_event::{EventKind, Message};
//! use lamina_layer::{AddOptions, Capture, Child, Layer, Layout, Panel};
//!
//! let mut layer = Layer::new(Rect::new(0.0, 0.0, 200.0, 100.0)).with_layout(Layout::Horizontal);
//! let a = layer.add(Panel::new(Rect::new(0.0, 0.0, 10.0, 10.0)), AddOptions::default());
//! let b = layer.add(Panel::new(Rect::new(0.0, 0.0, 10.0, 10.0)), AddOptions::default());
//!
//! assert_eq!(layer.child(a).unwrap().rect().origin(), Point::new(5.0, 5.0));
//! assert_eq!(layer.child(b).unwrap().rect().origin(), Point::new(20.0, 5.0));
//!
//! // Panels do not capture, so the message passes through.
//! let msg = Message::pointer(EventKind::PointerDown, Point::new(7.0, 7.0));
//! assert_eq!(layer.on_event(&msg), Capture::Passed);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and the sibling crates.
//! - `libm`: `no_std` float support.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod child;
mod layer;
mod layout;
mod panel;
mod root;

pub use child::{Capture, Child, ChildId, LayerId};
pub use layer::{Layer, LayerConfig, LayerFlags};
pub use layout::{AddOptions, Layout, LayoutEnv};
pub use panel::Panel;
pub use root::Root;
