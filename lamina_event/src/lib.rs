// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Event: immutable event envelopes for a layer tree.
//!
//! A [`Message`] describes one input occurrence. It carries:
//! - an [`EventKind`] tag (pointer, keyboard, text, or an application-defined kind),
//! - an optional originator handle ([`SourceId`]),
//! - an optional position, present for pointer messages,
//! - an optional opaque payload, and
//! - an optional completion callback the host fires once it is done with the message.
//!
//! Messages are value-like. Containers that forward pointer messages to their children never
//! mutate the original; they build a translated copy with [`Message::relative_to`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use lamina_event::{EventKind, Message};
//!
//! let msg = Message::pointer(EventKind::PointerDown, Point::new(30.0, 40.0));
//! assert!(msg.is_pointer());
//!
//! // A container at (10, 10) hands its children a local copy.
//! let local = msg.relative_to(Point::new(10.0, 10.0));
//! assert_eq!(local.position(), Some(Point::new(20.0, 30.0)));
//! assert_eq!(msg.position(), Some(Point::new(30.0, 40.0)));
//!
//! // Leaf nodes can hit test with the local copy.
//! assert!(local.hits(Rect::new(0.0, 0.0, 50.0, 50.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod message;

pub use message::{Completion, EventKind, Message, SourceId};
