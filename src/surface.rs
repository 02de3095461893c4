//! The drawing-surface seam: what the renderers need from whatever displays the map.

use std::fmt::Write as _;

use geo::{Coord, Rect};

/// Handle to one drawn element. Handles are never reused across [`DrawingSurface::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Presentation attributes for a drawn element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub class: Option<&'static str>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Style {
    pub fn class(class: &'static str) -> Self {
        Self { class: Some(class), ..Self::default() }
    }

    pub fn with_fill(mut self, fill: impl ToString) -> Self {
        self.fill = Some(fill.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// SVG path data in canvas coordinates, with its bounding box tracked as it is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    d: String,
    bounds: Option<Rect<f64>>,
}

impl PathData {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn d(&self) -> &str { &self.d }

    #[inline] pub fn bounds(&self) -> Option<Rect<f64>> { self.bounds }

    #[inline] pub fn is_empty(&self) -> bool { self.d.is_empty() }

    fn extend_bounds(&mut self, point: Coord<f64>) {
        self.bounds = Some(match self.bounds {
            None => Rect::new(point, point),
            Some(rect) => Rect::new(
                Coord { x: rect.min().x.min(point.x), y: rect.min().y.min(point.y) },
                Coord { x: rect.max().x.max(point.x), y: rect.max().y.max(point.y) },
            ),
        });
    }

    pub fn move_to(&mut self, point: Coord<f64>) {
        let _ = write!(self.d, " M{:.3},{:.3}", point.x, point.y);
        self.extend_bounds(point);
    }

    pub fn line_to(&mut self, point: Coord<f64>) {
        let _ = write!(self.d, " L{:.3},{:.3}", point.x, point.y);
        self.extend_bounds(point);
    }

    pub fn close(&mut self) { self.d.push('Z') }

    /// Append an open polyline as one subpath.
    pub fn push_line(&mut self, points: impl IntoIterator<Item = Coord<f64>>) {
        let mut points = points.into_iter();
        if let Some(first) = points.next() {
            self.move_to(first);
            points.for_each(|point| self.line_to(point));
        }
    }

    /// Append a closed ring as one subpath: "M x,y L x,y ... Z"
    pub fn push_ring(&mut self, points: impl IntoIterator<Item = Coord<f64>>) {
        let before = self.d.len();
        self.push_line(points);
        if self.d.len() > before { self.close() }
    }
}

/// A retained 2D drawing target (an SVG document, a DOM subtree, a canvas...).
///
/// Renderers issue commands in paint order; later elements paint over earlier ones.
pub trait DrawingSurface {
    /// Remove every element and resize the canvas.
    fn clear(&mut self, width: f64, height: f64);

    /// Open a named group whose children are offset by `translate`.
    fn begin_group(&mut self, id: &str, translate: (f64, f64));

    fn end_group(&mut self);

    fn draw_path(&mut self, path: &PathData, style: &Style) -> ElementId;

    fn draw_rect(&mut self, rect: Rect<f64>, style: &Style) -> ElementId;

    fn draw_line(&mut self, from: Coord<f64>, to: Coord<f64>, style: &Style) -> ElementId;

    fn draw_text(&mut self, at: Coord<f64>, text: &str, anchor: TextAnchor, style: &Style) -> ElementId;

    /// On-canvas bounding box of a live element, group offsets applied.
    fn bounding_box(&self, id: ElementId) -> Option<Rect<f64>>;
}

impl<T: DrawingSurface + ?Sized> DrawingSurface for &mut T {
    fn clear(&mut self, width: f64, height: f64) { (**self).clear(width, height) }

    fn begin_group(&mut self, id: &str, translate: (f64, f64)) { (**self).begin_group(id, translate) }

    fn end_group(&mut self) { (**self).end_group() }

    fn draw_path(&mut self, path: &PathData, style: &Style) -> ElementId { (**self).draw_path(path, style) }

    fn draw_rect(&mut self, rect: Rect<f64>, style: &Style) -> ElementId { (**self).draw_rect(rect, style) }

    fn draw_line(&mut self, from: Coord<f64>, to: Coord<f64>, style: &Style) -> ElementId {
        (**self).draw_line(from, to, style)
    }

    fn draw_text(&mut self, at: Coord<f64>, text: &str, anchor: TextAnchor, style: &Style) -> ElementId {
        (**self).draw_text(at, text, anchor, style)
    }

    fn bounding_box(&self, id: ElementId) -> Option<Rect<f64>> { (**self).bounding_box(id) }
}
