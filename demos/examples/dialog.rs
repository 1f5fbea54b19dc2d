// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toolbar, a content area, and a modal dialog, driven by a scripted input sequence.
//!
//! This example shows how to:
//! - build a [`Root`] whose init hook creates a horizontal toolbar and an aligned content layer,
//! - route pointer and keyboard messages through the tree and watch focus promotion,
//! - open a popup from host code when a button reports a click, and observe that it
//!   intercepts input until closed,
//! - replay the frame through a [`Recorder`].
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p lamina_demos --example dialog`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use lamina_event::{EventKind, Message, SourceId};
use lamina_layer::{AddOptions, Capture, Child, Layer, LayerId, Layout, Panel, Root};
use lamina_render::{Color, DrawCommand, Recorder, RenderContext};

/// A clickable node: captures pointer downs inside itself and counts them.
struct Button {
    label: &'static str,
    rect: Rect,
    clicks: Rc<Cell<u32>>,
    owner: Option<LayerId>,
}

impl Button {
    fn new(label: &'static str, width: f64, clicks: Rc<Cell<u32>>) -> Self {
        Self {
            label,
            rect: Rect::new(0.0, 0.0, width, 24.0),
            clicks,
            owner: None,
        }
    }
}

impl Child for Button {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn attach(&mut self, owner: Option<LayerId>) {
        self.owner = owner;
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        ctx.set_fill(Color::rgb8(60, 90, 200));
        ctx.fill_rect(self.rect);
    }

    fn on_event(&mut self, msg: &Message) -> Capture {
        if msg.kind() == EventKind::PointerDown && msg.hits(self.rect) {
            self.clicks.set(self.clicks.get() + 1);
            println!("  {} pressed (owner {:?})", self.label, self.owner);
            return Capture::Captured;
        }
        Capture::Passed
    }
}

/// A dialog that swallows every message and closes on Escape (modelled as `Custom(27)`).
struct Dialog {
    rect: Rect,
    dismissed: Rc<Cell<bool>>,
}

impl Child for Dialog {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        ctx.set_fill(Color::WHITE);
        ctx.fill_rect(self.rect);
    }

    fn on_event(&mut self, msg: &Message) -> Capture {
        println!("  dialog got {:?} at {:?}", msg.kind(), msg.position());
        if msg.kind() == EventKind::Custom(27) {
            self.dismissed.set(true);
        }
        Capture::Captured
    }
}

fn main() {
    env_logger::init();

    let save_clicks = Rc::new(Cell::new(0));
    let open_clicks = Rc::new(Cell::new(0));
    let toolbar_slot = Rc::new(Cell::new(None));

    let mut root = Root::new(Rect::new(0.0, 0.0, 320.0, 240.0)).with_init({
        let save_clicks = save_clicks.clone();
        let open_clicks = open_clicks.clone();
        let toolbar_slot = toolbar_slot.clone();
        move |layer| {
            layer.set_layout(Some(Layout::Vertical));

            let mut toolbar =
                Layer::new(Rect::new(0.0, 0.0, 310.0, 34.0)).with_layout(Layout::Horizontal);
            toolbar.add(Button::new("save", 60.0, save_clicks), AddOptions::new());
            toolbar.add(Button::new("open", 60.0, open_clicks), AddOptions::new());
            toolbar_slot.set(Some(layer.add(toolbar, AddOptions::new())));

            let mut content =
                Layer::new(Rect::new(0.0, 0.0, 310.0, 190.0)).with_layout(Layout::Align);
            content.add(
                Panel::sized(80.0, 40.0).with_fill(Color::rgb8(220, 220, 220)),
                AddOptions::new().align(0.5, 0.5),
            );
            content.add(
                Panel::sized(20.0, 20.0).with_fill(Color::rgb8(200, 60, 60)),
                AddOptions::new().align(1.0, 1.0),
            );
            layer.add(content, AddOptions::new());
        }
    });
    root.init();
    log::info!("root ready with {} children", root.len());

    let mouse = SourceId(1);
    let press = |x, y| {
        Message::pointer(EventKind::PointerDown, Point::new(x, y))
            .with_source(mouse)
            .on_complete(|m| println!("  done with {:?}", m.kind()))
    };

    println!("== press 'open' ==");
    // Toolbar sits at (5, 5); 'open' is its second button, at x = 5 + 60 + 5 inside it.
    let msg = press(80.0, 15.0);
    let result = root.on_event(&msg);
    msg.complete();
    println!("  -> {result:?}, open clicks = {}", open_clicks.get());

    if let Some(toolbar) = toolbar_slot.get().and_then(|id| root.layer_mut(id)) {
        println!("  toolbar order after focus: {:?}", toolbar.ids().collect::<Vec<_>>());
    }

    let dismissed = Rc::new(Cell::new(false));
    if open_clicks.get() > 0 {
        println!("== open dialog ==");
        root.show_popup(Some(Box::new(Dialog {
            rect: Rect::new(0.0, 0.0, 160.0, 90.0),
            dismissed: dismissed.clone(),
        })));
    }

    println!("== press 'save' while the dialog is up ==");
    let result = root.on_event(&press(15.0, 15.0));
    println!("  -> {result:?}, save clicks = {}", save_clicks.get());

    println!("== draw ==");
    let mut rec = Recorder::new();
    root.frame(&mut rec);
    for cmd in rec.commands() {
        if let DrawCommand::FillRect { device, color, .. } = cmd {
            println!("  fill {device:?} with {color:?}");
        }
    }

    println!("== escape ==");
    let _ = root.on_event(&Message::new(EventKind::Custom(27)));
    if dismissed.get() {
        root.close_popup();
    }
    println!("  popup open: {}", root.has_popup());

    let result = root.on_event(&press(15.0, 15.0));
    println!("  -> {result:?}, save clicks = {}", save_clicks.get());
}
