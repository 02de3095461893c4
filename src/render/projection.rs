use geo::{Coord, Rect};

/// How source coordinates relate to screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionKind {
    /// Already projected to screen-like units with y pointing down.
    #[default]
    Planar,
    /// Longitude/latitude degrees; y is flipped so north is up.
    Geographic,
}

/// Uniform scale-and-translate that fits the source bounds into a target extent,
/// preserving aspect ratio and centring the slack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    kind: ProjectionKind,
    bounds: Rect<f64>,
    scale: f64,
    origin: Coord<f64>,
}

impl Projection {
    pub fn fit(kind: ProjectionKind, bounds: Rect<f64>, extent: Rect<f64>) -> Self {
        let scale = match (bounds.width() > 0.0, bounds.height() > 0.0) {
            (true, true) => (extent.width() / bounds.width()).min(extent.height() / bounds.height()),
            (true, false) => extent.width() / bounds.width(),
            (false, true) => extent.height() / bounds.height(),
            (false, false) => 1.0,
        };

        let origin = Coord {
            x: extent.min().x + (extent.width() - bounds.width() * scale) / 2.0,
            y: extent.min().y + (extent.height() - bounds.height() * scale) / 2.0,
        };

        Self { kind, bounds, scale, origin }
    }

    #[inline] pub fn scale(&self) -> f64 { self.scale }

    /// Map a source coordinate to canvas coordinates.
    pub fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        let x = self.origin.x + (coord.x - self.bounds.min().x) * self.scale;
        let y = match self.kind {
            ProjectionKind::Planar => self.origin.y + (coord.y - self.bounds.min().y) * self.scale,
            ProjectionKind::Geographic => self.origin.y + (self.bounds.max().y - coord.y) * self.scale, // invert vertically
        };
        Coord { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
        Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
    }

    #[test]
    fn fits_wide_bounds_to_extent_width_and_centres_vertically() {
        let projection = Projection::fit(ProjectionKind::Planar, rect(0.0, 0.0, 200.0, 100.0), rect(10.0, 10.0, 110.0, 110.0));
        assert_eq!(projection.scale(), 0.5);
        assert_eq!(projection.project(Coord { x: 0.0, y: 0.0 }), Coord { x: 10.0, y: 35.0 });
        assert_eq!(projection.project(Coord { x: 200.0, y: 100.0 }), Coord { x: 110.0, y: 85.0 });
    }

    #[test]
    fn geographic_flips_latitude() {
        let projection = Projection::fit(ProjectionKind::Geographic, rect(-10.0, 40.0, 10.0, 60.0), rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(projection.project(Coord { x: -10.0, y: 60.0 }), Coord { x: 0.0, y: 0.0 });
        assert_eq!(projection.project(Coord { x: 10.0, y: 40.0 }), Coord { x: 100.0, y: 100.0 });
    }

    #[test]
    fn point_bounds_do_not_divide_by_zero() {
        let projection = Projection::fit(ProjectionKind::Planar, rect(3.0, 3.0, 3.0, 3.0), rect(0.0, 0.0, 10.0, 10.0));
        let p = projection.project(Coord { x: 3.0, y: 3.0 });
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p, Coord { x: 5.0, y: 5.0 });
    }
}
