// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use lamina_render::{Color, RenderContext};

use crate::{Child, LayerId};

/// A plain rectangular node: optionally filled, never captures input.
///
/// Useful as a background, a separator, or a placeholder while building a tree.
#[derive(Clone, Debug)]
pub struct Panel {
    rect: Rect,
    fill: Option<Color>,
    disabled: bool,
    owner: Option<LayerId>,
}

impl Panel {
    /// An unfilled panel occupying `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: None,
            disabled: false,
            owner: None,
        }
    }

    /// An unfilled panel of the given size at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(Rect::from_origin_size(Point::ZERO, (width, height)))
    }

    /// Fill the panel with `color` when drawn.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Enable or disable the panel.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The layer currently owning this panel.
    pub fn owner(&self) -> Option<LayerId> {
        self.owner
    }
}

impl Child for Panel {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn attach(&mut self, owner: Option<LayerId>) {
        self.owner = owner;
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if let Some(color) = self.fill {
            ctx.set_fill(color);
            ctx.fill_rect(self.rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_render::Recorder;

    #[test]
    fn draws_only_when_filled() {
        let mut rec = Recorder::new();
        Panel::sized(4.0, 4.0).draw(&mut rec);
        assert!(rec.commands().is_empty());

        Panel::sized(4.0, 4.0).with_fill(Color::WHITE).draw(&mut rec);
        assert_eq!(rec.fills().next(), Some(Rect::new(0.0, 0.0, 4.0, 4.0)));
    }
}
