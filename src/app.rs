//! The choropleth widget: owns the dataset snapshot and the surface, and reacts to host events.

use std::sync::Arc;

use geo::Coord;
use tokio::sync::{mpsc, watch};

use crate::{
    data::{Dataset, Source},
    error::Result,
    interaction::{InteractionLayer, Popup},
    layout::{Debouncer, LayoutEngine, TitleBlock, Viewport},
    render::{draw_failure, render, Frame},
    settings::Settings,
    surface::{DrawingSurface, ElementId},
};

/// Events delivered by whatever hosts the map (a browser window, a test harness...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Resize(Viewport),
    PointerEnter(ElementId),
    PointerLeave,
    /// Pointer position in canvas coordinates.
    PointerMove(Coord<f64>),
}

pub struct Choropleth<S> {
    dataset: Arc<Dataset>,
    settings: Settings,
    engine: LayoutEngine,
    title: TitleBlock,
    surface: S,
    frame: Option<Frame>,
    interaction: InteractionLayer,
    popup: watch::Sender<Popup>,
    passes: u64,
}

impl<S: DrawingSurface> Choropleth<S> {
    pub fn new(dataset: Arc<Dataset>, settings: Settings, title: TitleBlock, surface: S) -> Self {
        let (popup, _) = watch::channel(Popup::Hidden);
        Self {
            dataset,
            engine: LayoutEngine::new(settings.clone()),
            interaction: InteractionLayer::new(settings.popup_offset),
            settings,
            title,
            surface,
            frame: None,
            popup,
            passes: 0,
        }
    }

    /// Load both documents, then build the widget. If loading fails the surface is
    /// left showing the failure state, sized for `viewport`, and the error is returned.
    pub async fn load(
        topology: &Source,
        statistics: &Source,
        settings: Settings,
        title: TitleBlock,
        mut surface: S,
        viewport: Viewport,
    ) -> Result<Self> {
        match Dataset::load(topology, statistics, &settings).await {
            Ok(dataset) => Ok(Self::new(Arc::new(dataset), settings, title, surface)),
            Err(err) => {
                tracing::error!(error = %err, "failed to load map data");
                let layout = LayoutEngine::new(settings).compute(viewport, title);
                draw_failure(&mut surface, layout.width, layout.height, &err);
                Err(err)
            }
        }
    }

    #[inline] pub fn dataset(&self) -> &Dataset { &self.dataset }

    #[inline] pub fn surface(&self) -> &S { &self.surface }

    pub fn into_surface(self) -> S { self.surface }

    /// The most recent successful render pass.
    #[inline] pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }

    /// Number of render passes started so far.
    #[inline] pub fn passes(&self) -> u64 { self.passes }

    #[inline] pub fn popup(&self) -> &Popup { self.interaction.popup() }

    /// Follow popup changes from another task.
    pub fn subscribe_popup(&self) -> watch::Receiver<Popup> { self.popup.subscribe() }

    /// Lay out for `viewport` and run a full render pass. On failure the surface shows
    /// the failure state instead.
    pub fn redraw(&mut self, viewport: Viewport) -> Result<&Frame> {
        let layout = self.engine.compute(viewport, self.title);
        self.passes += 1;
        self.frame = None;

        // element ids from the previous pass are dead once the surface is cleared
        self.interaction.reset();
        self.popup.send_replace(Popup::Hidden);

        match render(&self.dataset, layout, &self.settings, &mut self.surface) {
            Ok(frame) => Ok(self.frame.insert(frame)),
            Err(err) => {
                tracing::error!(error = %err, pass = self.passes, "render failed");
                draw_failure(&mut self.surface, layout.width, layout.height, &err);
                Err(err)
            }
        }
    }

    /// Apply one event right away; resizes redraw immediately without debouncing.
    pub fn handle(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::Resize(viewport) => self.redraw(viewport).map(|_| ()),
            pointer => {
                self.pointer(pointer);
                Ok(())
            }
        }
    }

    fn pointer(&mut self, event: HostEvent) {
        let Some(frame) = &self.frame else { return };
        let popup = match event {
            HostEvent::PointerEnter(element) => self.interaction.pointer_enter(element, &frame.shapes, &self.surface),
            HostEvent::PointerMove(point) => self.interaction.pointer_move(point, &frame.shapes, &self.surface),
            HostEvent::PointerLeave => self.interaction.pointer_leave(),
            HostEvent::Resize(_) => return,
        };
        self.popup.send_if_modified(|current| {
            if *current == *popup { return false }
            *current = popup.clone();
            true
        });
    }

    /// Draw once for `initial`, then process events until the host closes the channel.
    ///
    /// Bursts of resize events collapse into a single redraw once `settings.debounce`
    /// has passed without another resize. A redraw still pending when the channel
    /// closes is carried out before returning.
    pub async fn run(&mut self, initial: Viewport, mut events: mpsc::Receiver<HostEvent>) -> Result<()> {
        self.redraw(initial)?;

        let (debouncer, mut fired) = Debouncer::new(self.settings.debounce);
        let mut debouncer = Some(debouncer);

        loop {
            tokio::select! {
                event = events.recv(), if debouncer.is_some() => match event {
                    Some(HostEvent::Resize(viewport)) => {
                        if let Some(debouncer) = debouncer.as_mut() { debouncer.call(viewport) }
                    }
                    Some(event) => self.pointer(event),
                    // the receiver below closes once any pending timer has fired
                    None => debouncer = None,
                },
                viewport = fired.recv() => match viewport {
                    Some(viewport) => { self.redraw(viewport)?; }
                    None => break,
                },
            }
        }

        tracing::debug!(passes = self.passes, "event loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{io::svg::SvgSurface, layout::Preset, Error};

    use super::*;

    const TOPOLOGY: &[u8] = br#"{
        "type": "Topology",
        "objects": {
            "counties": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "arcs": [[0, 1]], "id": 1001},
                {"type": "Polygon", "arcs": [[2, -1]], "id": 1003}
            ]},
            "states": {"type": "GeometryCollection", "geometries": []}
        },
        "arcs": [
            [[10, 0], [10, 10]],
            [[10, 10], [0, 10], [0, 0], [10, 0]],
            [[10, 0], [20, 0], [20, 10], [10, 10]]
        ]
    }"#;

    const STATISTICS: &[u8] = br#"[
        {"fips":1001,"area_name":"Autauga","state":"AL","bachelorsOrHigher":21.4},
        {"fips":1003,"area_name":"Baldwin","state":"AL","bachelorsOrHigher":28.6}
    ]"#;

    fn app() -> Choropleth<SvgSurface> {
        let settings = Settings::default();
        let dataset = Dataset::from_slices(TOPOLOGY, STATISTICS, &settings).unwrap();
        Choropleth::new(Arc::new(dataset), settings, TitleBlock::default(), SvgSurface::new())
    }

    #[test]
    fn redraw_picks_the_preset_from_the_viewport() {
        let mut app = app();
        assert_eq!(app.redraw(Viewport::new(1280.0, 900.0)).unwrap().layout.preset, Preset::Wide);
        assert_eq!(app.surface().size(), (1000.0, 600.0));

        assert_eq!(app.redraw(Viewport::new(600.0, 500.0)).unwrap().layout.preset, Preset::Narrow);
        assert_eq!(app.surface().size(), (570.0, 470.0));
        assert_eq!(app.passes(), 2);
    }

    #[test]
    fn pointer_events_drive_the_popup() {
        let mut app = app();
        let element = {
            let frame = app.redraw(Viewport::new(1280.0, 900.0)).unwrap();
            frame.shapes.iter().next().unwrap().0
        };
        let mut popups = app.subscribe_popup();

        app.handle(HostEvent::PointerEnter(element)).unwrap();
        assert!(popups.has_changed().unwrap());
        assert!(matches!(&*popups.borrow_and_update(), Popup::Visible { title, detail, .. }
            if title == "Autauga, AL" && detail == "21.4%"));

        app.handle(HostEvent::PointerLeave).unwrap();
        assert_eq!(*popups.borrow_and_update(), Popup::Hidden);
    }

    #[test]
    fn redraw_hides_the_popup() {
        let mut app = app();
        let element = app.redraw(Viewport::new(1280.0, 900.0)).unwrap().shapes.iter().next().unwrap().0;
        app.handle(HostEvent::PointerEnter(element)).unwrap();
        assert!(app.popup().is_visible());

        app.redraw(Viewport::new(1280.0, 900.0)).unwrap();
        assert!(!app.popup().is_visible());

        // the old element id no longer refers to anything
        app.handle(HostEvent::PointerEnter(element)).unwrap();
        assert!(!app.popup().is_visible());
    }

    #[test]
    fn failed_pass_leaves_the_failure_state() {
        let settings = Settings::default();
        let dataset = Dataset::from_slices(TOPOLOGY, br#"[{"fips":1001,"bachelorsOrHigher":21.4}]"#, &settings).unwrap();
        let mut app = Choropleth::new(Arc::new(dataset), settings, TitleBlock::default(), SvgSurface::new());

        let err = app.redraw(Viewport::new(1280.0, 900.0)).unwrap_err();
        assert!(matches!(err, Error::Join { .. }));
        assert!(app.frame().is_none());
        assert_eq!(app.surface().count(Some("region")), 0);
        assert_eq!(app.surface().count(Some("failure")), 1);
    }

    #[tokio::test]
    async fn load_failure_draws_onto_a_borrowed_surface() {
        let mut surface = SvgSurface::new();
        let result = Choropleth::load(
            &Source::from(TOPOLOGY.to_vec()),
            &Source::from(b"not json".to_vec()),
            Settings::default(),
            TitleBlock::default(),
            &mut surface,
            Viewport::new(1280.0, 900.0),
        ).await.map(drop);

        assert!(matches!(result, Err(Error::Parse { .. })));
        assert_eq!(surface.count(Some("failure")), 1);
        assert_eq!(surface.size(), (1000.0, 600.0));
    }
}
