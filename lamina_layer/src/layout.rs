// Copyright 2025 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement strategies.
//!
//! A [`Layout`] computes where a child goes from:
//! - the child's current rect (only its size matters),
//! - the rect of the previously placed sibling, if any,
//! - the child's [`AddOptions`],
//! - the container state in a [`LayoutEnv`].
//!
//! Strategies never read container state implicitly; everything they depend on is passed in,
//! which keeps them pure and lets the container re-run them after structural changes.

use kurbo::{Point, Rect, Size, Vec2};

/// Container state a strategy may consult.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutEnv {
    /// Margin between siblings and between the container edge and the first child.
    pub spacing: f64,
    /// Size of the area children are laid out in.
    pub bounds: Size,
}

/// Per-child options given to [`Layer::add`](crate::Layer::add).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AddOptions {
    /// Size the child as a fraction of the container, per axis, minus twice the spacing.
    ///
    /// A zero fraction keeps the child's own size on that axis.
    pub fill: Option<Vec2>,
    /// Normalized alignment point for [`Layout::Align`]. Each component is expected in
    /// `[0, 1]`; values outside are accepted and still produce an in-bounds position.
    pub align: Option<Vec2>,
    /// When `false`, the container never moves this child; its own origin is kept.
    pub use_layout: bool,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self {
            fill: None,
            align: None,
            use_layout: true,
        }
    }
}

impl AddOptions {
    /// Options with nothing set (equivalent to [`AddOptions::default`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill fractions per axis.
    pub fn fill(mut self, x: f64, y: f64) -> Self {
        self.fill = Some(Vec2::new(x, y));
        self
    }

    /// Alignment point per axis.
    pub fn align(mut self, x: f64, y: f64) -> Self {
        self.align = Some(Vec2::new(x, y));
        self
    }

    /// Keep the child where the caller put it.
    pub fn pinned(mut self) -> Self {
        self.use_layout = false;
        self
    }

    /// Whether any placement option (anything other than `fill`) was given.
    pub fn has_placement(&self) -> bool {
        self.align.is_some() || !self.use_layout
    }
}

/// Placement strategy of a [`Layer`](crate::Layer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Left to right: each child sits right of its previous sibling, on the same row.
    Horizontal,
    /// Top to bottom: each child sits below its previous sibling, in the same column.
    Vertical,
    /// Center the child on a normalized point of the container, kept fully inside it.
    Align,
}

impl Layout {
    /// Alignment used by [`Layout::Align`] when a child gives none.
    pub const DEFAULT_ALIGN: Vec2 = Vec2::new(0.5, 0.5);

    /// Raw strategy: where `child` goes after `previous`.
    pub fn place(
        self,
        child: Rect,
        previous: Option<Rect>,
        opts: &AddOptions,
        env: LayoutEnv,
    ) -> Point {
        match self {
            Self::Horizontal => match previous {
                Some(prev) => Point::new(prev.x1 + env.spacing, prev.y0),
                None => Self::origin(env),
            },
            Self::Vertical => match previous {
                Some(prev) => Point::new(prev.x0, prev.y1 + env.spacing),
                None => Self::origin(env),
            },
            Self::Align => {
                let align = opts.align.unwrap_or(Self::DEFAULT_ALIGN);
                let size = child.size();
                Point::new(
                    align_axis(env.bounds.width, size.width, align.x),
                    align_axis(env.bounds.height, size.height, align.y),
                )
            }
        }
    }

    /// Position a container assigns: the layout origin for a leading child without placement
    /// options, the strategy otherwise.
    pub fn position(
        self,
        child: Rect,
        previous: Option<Rect>,
        opts: &AddOptions,
        env: LayoutEnv,
    ) -> Point {
        if previous.is_none() && !opts.has_placement() {
            Self::origin(env)
        } else {
            self.place(child, previous, opts, env)
        }
    }

    /// Where the first child of a container goes: one spacing in from the top-left corner.
    pub fn origin(env: LayoutEnv) -> Point {
        Point::new(env.spacing, env.spacing)
    }

    /// Size of a child added with `fill`, given its current size.
    pub fn fill_size(own: Size, fill: Vec2, env: LayoutEnv) -> Size {
        let axis = |bounds: f64, own: f64, fraction: f64| {
            if fraction == 0.0 {
                own
            } else {
                (bounds * fraction - 2.0 * env.spacing).max(0.0)
            }
        };
        Size::new(
            axis(env.bounds.width, own.width, fill.x),
            axis(env.bounds.height, own.height, fill.y),
        )
    }
}

/// `clamp(parent * align - child / 2, 0, parent - child)`.
///
/// A child larger than its parent has a negative upper limit; it is pinned at 0.
fn align_axis(parent: f64, child: f64, align: f64) -> f64 {
    (parent * align - child / 2.0).min(parent - child).max(0.0)
}
