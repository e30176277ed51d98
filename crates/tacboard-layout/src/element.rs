#![forbid(unsafe_code)]

//! The measure/place primitive and its stack combinators.
//!
//! An [`Element`] is a precomputed size plus a single-shot draw. Sizes
//! never depend on placement, so a parent can finish all of its layout
//! arithmetic before the first emission; draws consume the element, which
//! makes "draw exactly once" structural rather than a convention.
//!
//! Width hints flow one way: a caller may ask an element to stretch wider
//! than its natural width, never narrower. Leaf label emitters honor the
//! hint; [`v_stack`] forwards it to every child so a spanning stretch
//! reaches the labels inside a composite; [`h_stack`] and [`with_padding`]
//! swallow it, since a horizontal span has no single recipient.

use tacboard_canvas::{Canvas, ShapeId};
use tacboard_core::{Point, Sides, Size};

type DrawFn = Box<dyn FnOnce(&mut dyn Canvas, Point, Option<f64>)>;

/// A sized, placeable piece of the diagram.
pub struct Element {
    size: Size,
    draw: DrawFn,
}

impl Element {
    /// Wrap a draw closure with its precomputed size.
    ///
    /// The closure receives the origin (relative to the element's parent
    /// shape) and an optional preferred width; emitters stretch to the
    /// preferred width only when it exceeds their natural one.
    #[must_use]
    pub fn new(size: Size, draw: impl FnOnce(&mut dyn Canvas, Point, Option<f64>) + 'static) -> Self {
        Self {
            size,
            draw: Box::new(draw),
        }
    }

    /// Zero-sized placeholder with a no-op draw.
    ///
    /// Keeps stack code branch-free when a slot has nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Size::ZERO, |_, _, _| {})
    }

    /// Natural size, fixed at construction.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Place at `origin` with no width hint.
    pub fn draw(self, canvas: &mut dyn Canvas, origin: Point) {
        (self.draw)(canvas, origin, None);
    }

    /// Place at `origin`, asking the element to widen to `width` if its
    /// natural width is smaller.
    pub fn draw_stretched(self, canvas: &mut dyn Canvas, origin: Point, width: f64) {
        (self.draw)(canvas, origin, Some(width));
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// An element bound to the shape id its draw will emit, so the arrow pass
/// can address the shape after layout.
#[derive(Debug)]
pub struct IdElement {
    pub id: ShapeId,
    pub element: Element,
}

/// Pad `el` on the given sides.
///
/// The padded element does not forward width hints; padding is exact.
#[must_use]
pub fn with_padding(padding: Sides, el: Element) -> Element {
    let size = el.size().pad(padding);
    Element::new(size, move |canvas, origin, _width| {
        el.draw(canvas, origin.offset(padding.left, padding.top));
    })
}

/// Force `width` as the preferred width, overriding any hint from the
/// caller. Lets an element measured early stretch to a sibling whose width
/// is only known later.
#[must_use]
pub fn with_width(width: f64, el: Element) -> Element {
    let size = el.size();
    Element::new(size, move |canvas, origin, _width| {
        el.draw_stretched(canvas, origin, width);
    })
}

/// Lay elements out left to right, top-aligned, `margin` apart.
///
/// Width is the sum of widths plus the gaps; height is the tallest
/// element. An empty list collapses to [`Element::empty`].
#[must_use]
pub fn h_stack(margin: f64, elements: Vec<Element>) -> Element {
    if elements.is_empty() {
        return Element::empty();
    }
    let width = elements.iter().map(|el| el.size().width).sum::<f64>()
        + margin * (elements.len() - 1) as f64;
    let height = elements
        .iter()
        .map(|el| el.size().height)
        .fold(0.0, f64::max);
    Element::new(Size::new(width, height), move |canvas, origin, _width| {
        let mut x = origin.x;
        for el in elements {
            let w = el.size().width;
            el.draw(canvas, Point::new(x, origin.y));
            x += w + margin;
        }
    })
}

/// Lay elements out top to bottom, left-aligned, `margin` apart.
///
/// Height is the sum of heights plus the gaps; width is the widest
/// element. An empty list collapses to [`Element::empty`].
///
/// A width hint passed to the stack is forwarded to every child, so
/// stretching a composite stretches the labels inside it.
#[must_use]
pub fn v_stack(margin: f64, elements: Vec<Element>) -> Element {
    if elements.is_empty() {
        return Element::empty();
    }
    let width = elements
        .iter()
        .map(|el| el.size().width)
        .fold(0.0, f64::max);
    let height = elements.iter().map(|el| el.size().height).sum::<f64>()
        + margin * (elements.len() - 1) as f64;
    Element::new(Size::new(width, height), move |canvas, origin, width| {
        let mut y = origin.y;
        for el in elements {
            let h = el.size().height;
            match width {
                Some(w) => el.draw_stretched(canvas, Point::new(origin.x, y), w),
                None => el.draw(canvas, Point::new(origin.x, y)),
            }
            y += h + margin;
        }
    })
}
