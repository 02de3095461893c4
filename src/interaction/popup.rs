use geo::Coord;

use crate::{
    render::{ShapeIndex, ShapeMeta},
    surface::{DrawingSurface, ElementId},
};

/// Hover popup state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Popup {
    #[default]
    Hidden,
    Visible {
        element: ElementId,
        meta: ShapeMeta,
        /// Bottom-centre of the popup, in canvas coordinates.
        anchor: Coord<f64>,
        /// e.g. "Autauga County, AL"
        title: String,
        /// e.g. "21.4%"
        detail: String,
    },
}

impl Popup {
    #[inline] pub fn is_visible(&self) -> bool { matches!(self, Popup::Visible { .. }) }

    pub fn element(&self) -> Option<ElementId> {
        match self {
            Popup::Visible { element, .. } => Some(*element),
            Popup::Hidden => None,
        }
    }
}

/// Tracks the hovered region and positions the popup above it.
#[derive(Debug, Clone, Default)]
pub struct InteractionLayer {
    offset: f64,
    popup: Popup,
}

impl InteractionLayer {
    /// `offset` is the gap between the hovered shape's top edge and the popup anchor.
    pub fn new(offset: f64) -> Self {
        Self { offset, popup: Popup::Hidden }
    }

    #[inline] pub fn popup(&self) -> &Popup { &self.popup }

    /// Show the popup for `element`. Entering another shape while one is shown moves
    /// the popup directly; elements unknown to `shapes` hide it.
    pub fn pointer_enter<S: DrawingSurface>(&mut self, element: ElementId, shapes: &ShapeIndex, surface: &S) -> &Popup {
        self.popup = match (shapes.get(element), surface.bounding_box(element)) {
            (Some(meta), Some(bbox)) => Popup::Visible {
                element,
                meta: meta.clone(),
                anchor: Coord { x: bbox.center().x, y: bbox.min().y - self.offset },
                title: meta.label.clone(),
                detail: format!("{}%", meta.value),
            },
            _ => {
                tracing::debug!(element = element.0, "pointer entered an element with no region");
                Popup::Hidden
            }
        };
        &self.popup
    }

    pub fn pointer_leave(&mut self) -> &Popup {
        self.popup = Popup::Hidden;
        &self.popup
    }

    /// Hit-test `point` against the drawn shapes and enter or leave accordingly.
    pub fn pointer_move<S: DrawingSurface>(&mut self, point: Coord<f64>, shapes: &ShapeIndex, surface: &S) -> &Popup {
        match shapes.hit_test(point) {
            Some(element) if self.popup.element() == Some(element) => &self.popup,
            Some(element) => self.pointer_enter(element, shapes, surface),
            None => self.pointer_leave(),
        }
    }

    /// Forget the hovered element; called whenever the surface is redrawn.
    pub fn reset(&mut self) {
        self.popup = Popup::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use geo::{polygon, MultiPolygon};

    use crate::{io::svg::SvgSurface, region::RegionId, surface::{PathData, Style}};

    use super::*;

    fn meta(id: &str, label: &str, value: f64) -> ShapeMeta {
        let (primary, secondary) = label.split_once(", ").unwrap_or((label, ""));
        ShapeMeta {
            region_id: RegionId::from(id),
            label: label.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            value,
        }
    }

    fn square(x: f64, y: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x, y: y), (x: x + 10.0, y: y), (x: x + 10.0, y: y + 10.0), (x: x, y: y + 10.0),
        ]])
    }

    /// Two adjacent squares drawn on a surface, with their shape index.
    fn scene() -> (SvgSurface, ShapeIndex) {
        let mut surface = SvgSurface::new();
        surface.clear(100.0, 100.0);

        let shapes = [("01001", "Autauga, AL", 21.4, square(20.0, 40.0)), ("01003", "Baldwin, AL", 28.6, square(30.0, 40.0))]
            .into_iter()
            .map(|(id, label, value, shape)| {
                let mut path = PathData::new();
                path.push_ring(shape.0[0].exterior().0.iter().copied());
                let element = surface.draw_path(&path, &Style::class("region"));
                (element, meta(id, label, value), shape)
            })
            .collect();

        (surface, ShapeIndex::new(shapes))
    }

    #[test]
    fn enter_shows_label_and_percentage_above_the_shape() {
        let (surface, shapes) = scene();
        let (element, _) = shapes.iter().next().unwrap();

        let mut layer = InteractionLayer::new(10.0);
        let popup = layer.pointer_enter(element, &shapes, &surface).clone();

        let Popup::Visible { title, detail, anchor, meta, .. } = popup else { panic!("popup hidden") };
        assert_eq!(title, "Autauga, AL");
        assert_eq!(detail, "21.4%");
        assert_eq!(anchor, Coord { x: 25.0, y: 30.0 });
        assert_eq!(meta.region_id.as_str(), "01001");
    }

    #[test]
    fn leave_hides() {
        let (surface, shapes) = scene();
        let (element, _) = shapes.iter().next().unwrap();

        let mut layer = InteractionLayer::new(10.0);
        layer.pointer_enter(element, &shapes, &surface);
        assert_eq!(layer.pointer_leave(), &Popup::Hidden);
    }

    #[test]
    fn entering_a_neighbour_moves_the_popup_directly() {
        let (surface, shapes) = scene();
        let elements = shapes.iter().map(|(element, _)| element).collect::<Vec<_>>();

        let mut layer = InteractionLayer::new(10.0);
        layer.pointer_enter(elements[0], &shapes, &surface);
        let popup = layer.pointer_enter(elements[1], &shapes, &surface);

        assert_eq!(popup.element(), Some(elements[1]));
        let Popup::Visible { title, anchor, .. } = popup else { panic!("popup hidden") };
        assert_eq!(title, "Baldwin, AL");
        assert_eq!(anchor.x, 35.0);
    }

    #[test]
    fn unknown_element_stays_hidden() {
        let (surface, shapes) = scene();
        let mut layer = InteractionLayer::new(10.0);
        assert!(!layer.pointer_enter(ElementId(999), &shapes, &surface).is_visible());
    }

    #[test]
    fn pointer_move_follows_the_geometry() {
        let (surface, shapes) = scene();
        let mut layer = InteractionLayer::new(10.0);

        let over_first = layer.pointer_move(Coord { x: 22.0, y: 45.0 }, &shapes, &surface).clone();
        assert!(matches!(&over_first, Popup::Visible { title, .. } if title == "Autauga, AL"));

        let over_second = layer.pointer_move(Coord { x: 38.0, y: 45.0 }, &shapes, &surface).clone();
        assert!(matches!(&over_second, Popup::Visible { title, .. } if title == "Baldwin, AL"));

        assert_eq!(layer.pointer_move(Coord { x: 90.0, y: 90.0 }, &shapes, &surface), &Popup::Hidden);
    }

    #[test]
    fn reset_hides() {
        let (surface, shapes) = scene();
        let (element, _) = shapes.iter().next().unwrap();
        let mut layer = InteractionLayer::new(10.0);
        layer.pointer_enter(element, &shapes, &surface);
        layer.reset();
        assert!(!layer.popup().is_visible());
    }
}
