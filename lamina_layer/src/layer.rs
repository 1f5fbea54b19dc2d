// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Layer`] container: child management, placement, traversal, and event routing.

use alloc::{boxed::Box, vec::Vec};

use kurbo::{Point, Rect, Size};
use lamina_event::Message;
use lamina_render::{Color, RenderContext};

use crate::child::{Capture, Child, ChildId, LayerId};
use crate::layout::{AddOptions, Layout, LayoutEnv};

bitflags::bitflags! {
    /// Layer behavior flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u8 {
        /// Offer messages to children (ignored while a popup is shown).
        const FORWARD_EVENTS = 0b0000_0001;
        /// Skip this layer in its parent's draw, update, and dispatch.
        const DISABLED       = 0b0000_0010;
    }
}

impl Default for LayerFlags {
    fn default() -> Self {
        Self::FORWARD_EVENTS
    }
}

/// Construction-time settings for a [`Layer`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    /// Placement strategy; `None` leaves children where the caller put them.
    pub layout: Option<Layout>,
    /// Margin used by the strategies and by `fill` sizing.
    pub spacing: f64,
    /// Layout bounds used when the layer's own rect has zero area.
    pub max_size: Size,
    /// Whether messages are offered to children.
    pub event_forwarding: bool,
    /// Color of the overlay drawn under a popup.
    pub scrim: Color,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            layout: None,
            spacing: 5.0,
            max_size: Size::ZERO,
            event_forwarding: true,
            scrim: Color::BLACK.with_alpha(128),
        }
    }
}

struct Slot {
    id: ChildId,
    options: AddOptions,
    node: Box<dyn Child>,
}

/// A container node owning an ordered sequence of children and an optional popup.
///
/// Index 0 of the sequence has the highest focus priority; drawing walks the sequence from
/// index 0 upward. See the [crate docs](crate) for the overall model.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use lamina_layer::{AddOptions, Child, Layer, Layout, Panel};
///
/// let mut layer = Layer::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_layout(Layout::Align);
/// let id = layer.add(Panel::sized(20.0, 20.0), AddOptions::new().align(1.0, 1.0));
/// assert_eq!(layer.child(id).unwrap().rect().origin(), Point::new(80.0, 80.0));
///
/// // Popups are centered on the layer.
/// layer.show_popup(Some(Box::new(Panel::sized(40.0, 20.0))));
/// assert_eq!(layer.popup().unwrap().rect().origin(), Point::new(30.0, 40.0));
///
/// // Structural changes close the popup.
/// layer.remove(id);
/// assert!(!layer.has_popup());
/// ```
pub struct Layer {
    id: LayerId,
    rect: Rect,
    owner: Option<LayerId>,
    flags: LayerFlags,
    layout: Option<Layout>,
    spacing: f64,
    max_size: Size,
    scrim: Color,
    next_serial: u32,
    children: Vec<Slot>,
    popup: Option<Box<dyn Child>>,
}

impl core::fmt::Debug for Layer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Layer")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("owner", &self.owner)
            .field("flags", &self.flags)
            .field("layout", &self.layout)
            .field("spacing", &self.spacing)
            .field("children", &self.children.len())
            .field("popup", &self.popup.is_some())
            .finish_non_exhaustive()
    }
}

impl Layer {
    /// Create an empty layer occupying `rect` with the default configuration.
    pub fn new(rect: Rect) -> Self {
        Self::with_config(rect, LayerConfig::default())
    }

    /// Create an empty layer occupying `rect`.
    pub fn with_config(rect: Rect, config: LayerConfig) -> Self {
        let mut flags = LayerFlags::empty();
        flags.set(LayerFlags::FORWARD_EVENTS, config.event_forwarding);
        Self {
            id: LayerId::next(),
            rect,
            owner: None,
            flags,
            layout: config.layout,
            spacing: config.spacing,
            max_size: config.max_size,
            scrim: config.scrim,
            next_serial: 0,
            children: Vec::new(),
            popup: None,
        }
    }

    /// Set the placement strategy.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enable or disable event forwarding.
    pub fn with_event_forwarding(mut self, forwarding: bool) -> Self {
        self.flags.set(LayerFlags::FORWARD_EVENTS, forwarding);
        self
    }

    /// Set the layout bounds used when the rect has zero area.
    pub fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the popup scrim color.
    pub fn with_scrim(mut self, scrim: Color) -> Self {
        self.scrim = scrim;
        self
    }

    /// This layer's identifier.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The layer owning this one, if it has been added somewhere.
    pub fn owner(&self) -> Option<LayerId> {
        self.owner
    }

    /// Behavior flags.
    pub fn flags(&self) -> LayerFlags {
        self.flags
    }

    /// Placement strategy.
    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// Replace the placement strategy. Existing children keep their positions until the next
    /// structural change or [`Layer::relayout`].
    pub fn set_layout(&mut self, layout: Option<Layout>) {
        self.layout = layout;
    }

    /// Spacing between children.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Change the spacing. Takes effect for placements computed afterwards.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    /// Layout bounds used when the rect has zero area.
    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Change the fallback layout bounds.
    pub fn set_max_size(&mut self, max_size: Size) {
        self.max_size = max_size;
    }

    /// Whether messages are offered to children.
    pub fn event_forwarding(&self) -> bool {
        self.flags.contains(LayerFlags::FORWARD_EVENTS)
    }

    /// Enable or disable event forwarding.
    pub fn set_event_forwarding(&mut self, forwarding: bool) {
        self.flags.set(LayerFlags::FORWARD_EVENTS, forwarding);
    }

    /// Enable or disable this layer as a whole.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.set(LayerFlags::DISABLED, disabled);
    }

    /// Popup scrim color.
    pub fn scrim(&self) -> Color {
        self.scrim
    }

    /// Change the popup scrim color.
    pub fn set_scrim(&mut self, scrim: Color) {
        self.scrim = scrim;
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the layer has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child handles in sequence order (index 0 first).
    pub fn ids(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.children.iter().map(|slot| slot.id)
    }

    /// Position of a child in the sequence.
    pub fn index_of(&self, id: ChildId) -> Option<usize> {
        self.children.iter().position(|slot| slot.id == id)
    }

    /// Borrow a child.
    pub fn child(&self, id: ChildId) -> Option<&dyn Child> {
        self.children
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &*slot.node)
    }

    /// Mutably borrow a child.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn Child + 'static)> {
        self.children
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| &mut *slot.node)
    }

    /// Mutably borrow a child that is itself a layer.
    pub fn layer_mut(&mut self, id: ChildId) -> Option<&mut Self> {
        self.child_mut(id)?.as_layer_mut()
    }

    /// The active popup.
    pub fn popup(&self) -> Option<&dyn Child> {
        self.popup.as_deref()
    }

    /// Whether a popup is shown.
    pub fn has_popup(&self) -> bool {
        self.popup.is_some()
    }

    fn env(&self) -> LayoutEnv {
        let bounds = if self.rect.is_zero_area() {
            self.max_size
        } else {
            self.rect.size()
        };
        LayoutEnv {
            spacing: self.spacing,
            bounds,
        }
    }

    /// Add `child` at the end of the sequence and return its handle.
    ///
    /// With a layout set, `opts.fill` resizes the child and, unless `opts.use_layout` is
    /// false, the child is positioned by the strategy. The child's back-reference is set and
    /// [`Child::init`] runs before it joins the sequence. Any active popup is closed.
    pub fn add<C: Child + 'static>(&mut self, child: C, opts: AddOptions) -> ChildId {
        self.add_boxed(Box::new(child), opts)
    }

    /// [`Layer::add`] for an already boxed child.
    pub fn add_boxed(&mut self, mut node: Box<dyn Child>, opts: AddOptions) -> ChildId {
        node.attach(Some(self.id));
        if let Some(layout) = self.layout {
            let env = self.env();
            if let Some(fill) = opts.fill {
                let rect = node.rect();
                let size = Layout::fill_size(rect.size(), fill, env);
                node.set_rect(Rect::from_origin_size(rect.origin(), size));
            }
            if opts.use_layout {
                let previous = self.children.last().map(|slot| slot.node.rect());
                let origin = layout.position(node.rect(), previous, &opts, env);
                node.set_origin(origin);
            }
        }
        node.init();

        let id = ChildId::new(self.id, self.next_serial);
        self.next_serial += 1;
        log::debug!("layer {:?}: added {:?} at {:?}", self.id, id, node.rect());
        self.children.push(Slot {
            id,
            options: opts,
            node,
        });
        self.invalidate_popup();
        id
    }

    /// Remove a child and hand it back, detached.
    ///
    /// Absent handles remove nothing. Either way the remaining children are re-placed and any
    /// active popup is closed.
    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn Child>> {
        let removed = self.index_of(id).map(|index| {
            let mut node = self.children.remove(index).node;
            node.attach(None);
            log::debug!("layer {:?}: removed {:?}", self.id, id);
            node
        });
        self.relayout();
        self.invalidate_popup();
        removed
    }

    /// Drop every child and close any active popup.
    pub fn clear(&mut self) {
        for mut slot in self.children.drain(..) {
            slot.node.attach(None);
        }
        log::debug!("layer {:?}: cleared", self.id);
        self.relayout();
        self.invalidate_popup();
    }

    /// Re-derive every laid-out child's position in sequence order.
    ///
    /// The first child without placement options returns to the layout origin; every other
    /// child is placed after its current predecessor. Pinned children stay put. Without a
    /// layout this does nothing.
    pub fn relayout(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };
        let env = self.env();
        let mut previous: Option<Rect> = None;
        for slot in &mut self.children {
            if slot.options.use_layout {
                let origin = layout.position(slot.node.rect(), previous, &slot.options, env);
                slot.node.set_origin(origin);
            }
            previous = Some(slot.node.rect());
        }
    }

    /// Show `popup` centered on this layer, or close the current popup with `None`.
    ///
    /// Returns the popup that was shown before, detached.
    pub fn show_popup(&mut self, popup: Option<Box<dyn Child>>) -> Option<Box<dyn Child>> {
        let previous = self.take_popup();
        if let Some(mut popup) = popup {
            popup.attach(Some(self.id));
            let size = popup.rect().size();
            popup.set_origin(Point::new(
                self.rect.width() / 2.0 - size.width / 2.0,
                self.rect.height() / 2.0 - size.height / 2.0,
            ));
            log::debug!("layer {:?}: popup shown at {:?}", self.id, popup.rect());
            self.popup = Some(popup);
        }
        previous
    }

    /// Close the popup, returning it detached.
    pub fn close_popup(&mut self) -> Option<Box<dyn Child>> {
        self.show_popup(None)
    }

    fn take_popup(&mut self) -> Option<Box<dyn Child>> {
        let mut popup = self.popup.take()?;
        popup.attach(None);
        Some(popup)
    }

    // The popup was centered against the old arrangement; it is dropped, not re-centered.
    fn invalidate_popup(&mut self) {
        if self.take_popup().is_some() {
            log::debug!("layer {:?}: popup closed by structural change", self.id);
        }
    }

    /// Move the child at `id` to the front of the sequence (index 0).
    ///
    /// Returns `false` if the handle is not live.
    pub fn bring_to_front(&mut self, id: ChildId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.promote(index);
                true
            }
            None => false,
        }
    }

    fn promote(&mut self, index: usize) {
        if index > 0 {
            self.children[..=index].rotate_right(1);
            log::debug!(
                "layer {:?}: {:?} promoted from {index}",
                self.id,
                self.children[0].id
            );
        }
    }
}

impl Child for Layer {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn is_disabled(&self) -> bool {
        self.flags.contains(LayerFlags::DISABLED)
    }

    fn attach(&mut self, owner: Option<LayerId>) {
        self.owner = owner;
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        ctx.save();
        ctx.translate(self.rect.origin().to_vec2());
        for slot in &self.children {
            if !slot.node.is_disabled() {
                slot.node.draw(ctx);
            }
        }
        if let Some(popup) = &self.popup {
            ctx.set_fill(self.scrim);
            ctx.fill_rect(self.rect.with_origin(Point::ZERO));
            popup.draw(ctx);
        }
        ctx.restore();
    }

    fn on_event(&mut self, msg: &Message) -> Capture {
        let local;
        let msg = if msg.is_pointer() {
            if !self.rect.is_zero_area() && !msg.hits(self.rect) {
                log::trace!("layer {:?}: {:?} outside bounds", self.id, msg.kind());
                return Capture::Passed;
            }
            local = msg.relative_to(self.rect.origin());
            &local
        } else {
            msg
        };

        if let Some(popup) = &mut self.popup {
            log::trace!("layer {:?}: {:?} routed to popup", self.id, msg.kind());
            return popup.on_event(msg);
        }
        if !self.event_forwarding() {
            return Capture::Passed;
        }

        let mut captured = None;
        for (index, slot) in self.children.iter_mut().enumerate() {
            if slot.node.is_disabled() {
                continue;
            }
            if slot.node.on_event(msg).is_captured() {
                captured = Some(index);
                break;
            }
        }
        match captured {
            Some(index) => {
                self.promote(index);
                Capture::Captured
            }
            None => Capture::Passed,
        }
    }

    fn update(&mut self) {
        if let Some(popup) = &mut self.popup {
            popup.update();
            return;
        }
        for slot in &mut self.children {
            if !slot.node.is_disabled() {
                slot.node.update();
            }
        }
    }

    fn as_layer_mut(&mut self) -> Option<&mut Self> {
        Some(self)
    }
}
