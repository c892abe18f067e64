//! Integer geometry primitives.
//!
//! Every shape extent is an axis-aligned [`BoundingBox`] in canvas pixels.
//! Boxes are half-open: a box covers `x..x + width` horizontally and
//! `y..y + height` vertically.
//!
//! A box is *representable* when both of its far edges fit in an `i32`.
//! The `checked_*` constructors only produce representable boxes and are
//! what the bounded transforms build their candidates with.

use serde::{Deserialize, Serialize};

/// Smallest width or height a shape may have once an operation completes.
pub const MIN_SIZE: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

}

/// Axis-aligned box defined by its top-left origin and its size.
///
/// A box with a non-positive width or height is *empty*. The empty box is the
/// identity of [`BoundingBox::union`], which lets a group with no children
/// report an empty extent that is trivially inside any canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Box of the given size whose center is `center`, or `None` when it
    /// would not be representable.
    pub fn centered_at(center: Point, width: i32, height: i32) -> Option<Self> {
        Self::new(
            center.x.checked_sub(width / 2)?,
            center.y.checked_sub(height / 2)?,
            width,
            height,
        )
        .representable()
    }

    /// Builds a box from wide edge coordinates.
    fn from_edges(left: i64, top: i64, right: i64, bottom: i64) -> Option<Self> {
        Self::new(
            i32::try_from(left).ok()?,
            i32::try_from(top).ok()?,
            i32::try_from(right - left).ok()?,
            i32::try_from(bottom - top).ok()?,
        )
        .representable()
    }

    fn right_wide(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn bottom_wide(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn is_representable(&self) -> bool {
        i32::try_from(self.right_wide()).is_ok() && i32::try_from(self.bottom_wide()).is_ok()
    }

    fn representable(self) -> Option<Self> {
        self.is_representable().then_some(self)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Far horizontal edge, saturating for a box that is not representable.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Horizontal middle rounded toward the origin.
    pub fn mid_x(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Exact center, for distance tests.
    pub fn center_f64(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Shifted box. Only used once the move has been checked.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Shifted box, or `None` when the result is not representable.
    pub fn checked_translated(&self, dx: i32, dy: i32) -> Option<Self> {
        Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.width,
            self.height,
        )
        .representable()
    }

    /// Grows (positive `delta`) or shrinks (negative `delta`) every side by
    /// `delta`, keeping the center fixed. `None` when the result is not
    /// representable.
    pub fn with_margin(&self, delta: i32) -> Option<Self> {
        let twice = delta.checked_mul(2)?;
        Self::new(
            self.x.checked_sub(delta)?,
            self.y.checked_sub(delta)?,
            self.width.checked_add(twice)?,
            self.height.checked_add(twice)?,
        )
        .representable()
    }

    /// Smallest box covering both boxes. Empty boxes are ignored. `None`
    /// when the cover is not representable.
    pub fn checked_union(&self, other: &BoundingBox) -> Option<Self> {
        if self.is_empty() {
            return other.representable();
        }
        if other.is_empty() {
            return self.representable();
        }
        Self::from_edges(
            i64::from(self.x.min(other.x)),
            i64::from(self.y.min(other.y)),
            self.right_wide().max(other.right_wide()),
            self.bottom_wide().max(other.bottom_wide()),
        )
    }

    /// Like [`BoundingBox::checked_union`], clamping a cover that does not
    /// fit in `i32` coordinates.
    pub fn union(&self, other: &BoundingBox) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        self.checked_union(other).unwrap_or_else(|| {
            let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
            let left = clamp(i64::from(self.x.min(other.x)));
            let top = clamp(i64::from(self.y.min(other.y)));
            let right = clamp(self.right_wide().max(other.right_wide()));
            let bottom = clamp(self.bottom_wide().max(other.bottom_wide()));
            Self::new(
                left as i32,
                top as i32,
                clamp(right - left) as i32,
                clamp(bottom - top) as i32,
            )
        })
    }

    /// True when `self` lies entirely inside `canvas`, i.e. adding `self`
    /// to `canvas` does not enlarge it.
    pub fn is_within(&self, canvas: &BoundingBox) -> bool {
        self.checked_union(canvas) == Some(*canvas)
    }

    pub fn has_min_size(&self) -> bool {
        self.width >= MIN_SIZE && self.height >= MIN_SIZE
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}
