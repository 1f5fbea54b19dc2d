// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree root driven by the host's engine loop.

use alloc::boxed::Box;
use core::ops::{Deref, DerefMut};

use kurbo::Rect;
use lamina_event::Message;
use lamina_render::RenderContext;

use crate::{Capture, Child, Layer, LayerId};

type InitHook = Box<dyn FnOnce(&mut Layer)>;

/// A [`Layer`] used as the root of a tree, with a one-time initialization hook.
///
/// The host calls [`Root::init`] once before its first tick, then [`Root::frame`] (or
/// [`Child::update`] followed by [`Child::draw`]) every tick, and [`Child::on_event`] for each
/// input. Everything else is plain [`Layer`] behavior, reachable through `Deref`.
///
/// ```rust
/// use kurbo::Rect;
/// use lamina_layer::{AddOptions, Layout, Panel, Root};
/// use lamina_render::Recorder;
///
/// let mut root = Root::new(Rect::new(0.0, 0.0, 320.0, 240.0)).with_init(|layer| {
///     layer.set_layout(Some(Layout::Vertical));
///     layer.add(Panel::sized(100.0, 20.0), AddOptions::new());
/// });
/// root.init();
/// assert_eq!(root.len(), 1);
///
/// let mut rec = Recorder::new();
/// root.frame(&mut rec);
/// assert_eq!(rec.depth(), 0);
/// ```
pub struct Root {
    layer: Layer,
    hook: Option<InitHook>,
    initialized: bool,
}

impl core::fmt::Debug for Root {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Root")
            .field("layer", &self.layer)
            .field("has_hook", &self.hook.is_some())
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl Root {
    /// A root covering `rect` with a default [`Layer`] configuration.
    pub fn new(rect: Rect) -> Self {
        Self::from_layer(Layer::new(rect))
    }

    /// Wrap an existing layer.
    pub fn from_layer(layer: Layer) -> Self {
        Self {
            layer,
            hook: None,
            initialized: false,
        }
    }

    /// Register the initialization hook run by [`Root::init`].
    pub fn with_init(mut self, hook: impl FnOnce(&mut Layer) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Run the initialization hook. Only the first call has an effect.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("root {:?}: init called more than once", self.layer.id());
            return;
        }
        self.initialized = true;
        if let Some(hook) = self.hook.take() {
            hook(&mut self.layer);
        }
        log::debug!(
            "root {:?}: initialized with {} children",
            self.layer.id(),
            self.layer.len()
        );
    }

    /// Whether [`Root::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// One tick: update the tree, then draw it.
    pub fn frame(&mut self, ctx: &mut dyn RenderContext) {
        self.layer.update();
        self.layer.draw(ctx);
    }

    /// Unwrap the root layer.
    pub fn into_layer(self) -> Layer {
        self.layer
    }
}

impl Deref for Root {
    type Target = Layer;

    fn deref(&self) -> &Layer {
        &self.layer
    }
}

impl DerefMut for Root {
    fn deref_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }
}

impl Child for Root {
    fn rect(&self) -> Rect {
        self.layer.rect()
    }

    fn set_rect(&mut self, rect: Rect) {
        self.layer.set_rect(rect);
    }

    fn is_disabled(&self) -> bool {
        self.layer.is_disabled()
    }

    fn attach(&mut self, owner: Option<LayerId>) {
        self.layer.attach(owner);
    }

    fn init(&mut self) {
        Self::init(self);
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        self.layer.draw(ctx);
    }

    fn on_event(&mut self, msg: &Message) -> Capture {
        self.layer.on_event(msg)
    }

    fn update(&mut self) {
        self.layer.update();
    }

    fn as_layer_mut(&mut self) -> Option<&mut Layer> {
        Some(&mut self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Point;
    use lamina_event::EventKind;
    use lamina_render::Recorder;

    use crate::{AddOptions, Layout, Panel};

    #[test]
    fn init_runs_once() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let mut root = Root::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_init(move |layer| {
            counter.set(counter.get() + 1);
            layer.add(Panel::sized(10.0, 10.0), AddOptions::new());
        });
        assert!(!root.is_initialized());
        root.init();
        root.init();
        assert!(root.is_initialized());
        assert_eq!(runs.get(), 1);
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn init_without_hook_is_fine() {
        let mut root = Root::new(Rect::ZERO);
        root.init();
        assert!(root.is_initialized());
        assert!(root.is_empty());
    }

    #[test]
    fn behaves_as_a_layer() {
        let mut root = Root::from_layer(
            Layer::new(Rect::new(0.0, 0.0, 50.0, 50.0)).with_layout(Layout::Horizontal),
        );
        let a = root.add(Panel::sized(10.0, 10.0), AddOptions::new());
        let b = root.add(Panel::sized(10.0, 10.0), AddOptions::new());
        assert_eq!(root.child(b).unwrap().rect().origin(), Point::new(20.0, 5.0));

        let outside = Message::pointer(EventKind::PointerDown, Point::new(60.0, 60.0));
        assert_eq!(root.on_event(&outside), Capture::Passed);

        assert!(root.bring_to_front(b));
        assert_eq!(root.index_of(a), Some(1));
        assert!(root.as_layer_mut().is_some());
    }

    #[test]
    fn frame_updates_then_draws() {
        let mut root = Root::new(Rect::new(5.0, 5.0, 50.0, 50.0));
        root.add(
            Panel::sized(10.0, 10.0).with_fill(lamina_render::Color::WHITE),
            AddOptions::new(),
        );
        let mut rec = Recorder::new();
        root.frame(&mut rec);
        assert_eq!(rec.fills().collect::<alloc::vec::Vec<_>>(), [Rect::new(5.0, 5.0, 15.0, 15.0)]);
    }
}
