// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-list [`RenderContext`] implementation.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::{Color, RenderContext};

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// State pushed.
    Save,
    /// State popped.
    Restore,
    /// Origin moved by the given offset.
    Translate(Vec2),
    /// Fill color changed.
    SetFill(Color),
    /// Rectangle filled.
    FillRect {
        /// Rectangle as passed by the caller, in local space.
        local: Rect,
        /// Rectangle in device space (local plus every active translation).
        device: Rect,
        /// Fill color in effect.
        color: Color,
    },
}

#[derive(Copy, Clone, Debug, Default)]
struct State {
    offset: Vec2,
    fill: Color,
}

/// A [`RenderContext`] that records commands instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
    stack: Vec<State>,
    current: State,
}

impl Recorder {
    /// Create an empty recorder with the origin at zero and a transparent fill.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Device-space rectangles of every fill, in paint order.
    pub fn fills(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { device, .. } => Some(*device),
            _ => None,
        })
    }

    /// Current absolute origin.
    pub fn offset(&self) -> Vec2 {
        self.current.offset
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop recorded commands and reset the drawing state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.current = State::default();
    }
}

impl RenderContext for Recorder {
    fn save(&mut self) {
        self.stack.push(self.current);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        let Some(state) = self.stack.pop() else {
            log::warn!("Recorder::restore without a matching save; ignored");
            return;
        };
        self.current = state;
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.current.offset += offset;
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn set_fill(&mut self, color: Color) {
        self.current.fill = color;
        self.commands.push(DrawCommand::SetFill(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect {
            local: rect,
            device: rect + self.current.offset,
            color: self.current.fill,
        });
    }
}
