use crate::error::{SearchError, ValidationError};
use crate::gesture::{HOLD_DURATION, PinGesture, PressId};
use crate::messages;
use crate::model::{MapDefaults, MarkerId, MarkerStyle, PinState, SearchSettings};
use crate::ports::{MapPort, PagePort};
use crate::view::render;
use reefscout_client::{LngLat, Site, SiteBackend, SiteId};
use std::cell::{Cell, Ref, RefCell};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// How a search ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `count` sites are now on the map and in the list
    Rendered { count: usize },
    /// The server found nothing; the empty-state message is shown
    Empty,
    /// A newer search started while this one was in flight; its response was dropped
    Stale,
    /// Submission had neither a pin nor text
    NeedsInput,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Location,
    Text,
}

/// Owns the map, the page and the pin, and turns user intents into searches.
///
/// All methods take `&self` so several searches can be awaited on the same
/// task. Interior borrows are never held across an `.await`.
pub struct SearchController<B, M, P> {
    backend: B,
    map: RefCell<M>,
    page: RefCell<P>,
    settings: SearchSettings,
    style: MarkerStyle,
    pin_color: String,
    markers: RefCell<Vec<MarkerId>>,
    results: RefCell<Vec<Site>>,
    gesture: RefCell<PinGesture>,
    generation: Cell<u64>,
    list_visible: Cell<bool>,
}

impl<B, M, P> SearchController<B, M, P>
where
    B: SiteBackend,
    M: MapPort,
    P: PagePort,
{
    pub fn new(backend: B, map: M, page: P) -> Self {
        Self::with_defaults(backend, map, page, MapDefaults::default())
    }

    pub fn with_defaults(backend: B, mut map: M, page: P, defaults: MapDefaults) -> Self {
        map.set_zoom(defaults.zoom);
        map.set_center(defaults.center);

        Self {
            backend,
            map: RefCell::new(map),
            page: RefCell::new(page),
            settings: SearchSettings::default(),
            style: MarkerStyle::default(),
            pin_color: defaults.pin_color,
            markers: RefCell::new(Vec::new()),
            results: RefCell::new(Vec::new()),
            gesture: RefCell::new(PinGesture::new()),
            generation: Cell::new(0),
            list_visible: Cell::new(true),
        }
    }

    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn map(&self) -> Ref<'_, M> {
        self.map.borrow()
    }

    pub fn page(&self) -> Ref<'_, P> {
        self.page.borrow()
    }

    pub fn pin(&self) -> PinState {
        self.gesture.borrow().pin()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.borrow().len()
    }

    /// Look up a site among the results currently on screen.
    pub fn result(&self, id: &SiteId) -> Option<Site> {
        self.results.borrow().iter().find(|site| &site.id == id).cloned()
    }

    pub async fn search_by_location(&self, lng: f64, lat: f64) -> Result<SearchOutcome, SearchError> {
        let generation = self.begin_search();
        let at = LngLat::new(lng, lat);
        info!("Location search #{} at {}", generation, at);

        let result = self.backend.search_nearby(at, self.settings.radius).await;
        self.finish_search(generation, Mode::Location, result)
    }

    pub async fn search_by_text(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let generation = self.begin_search();
        let query = query.trim();

        if query.chars().count() < self.settings.min_query_len {
            let err = ValidationError::TooShort {
                min: self.settings.min_query_len,
            };
            debug!("Rejected query '{}': {}", query, err);
            self.clear_results();
            self.page.borrow_mut().show_message(&err.to_string());
            self.page.borrow_mut().set_status(messages::SHOW_LIST);
            return Err(err.into());
        }

        info!("Text search #{} for '{}'", generation, query);
        let result = self.backend.search_text(query).await;
        self.finish_search(generation, Mode::Text, result)
    }

    /// Run whichever search the current input calls for. A placed pin wins over text.
    pub async fn submit(&self, text: &str) -> Result<SearchOutcome, SearchError> {
        if let Some(at) = self.pin().location() {
            return self.search_by_location(at.lng, at.lat).await;
        }

        if !text.trim().is_empty() {
            return self.search_by_text(text).await;
        }

        self.begin_search();
        let mut page = self.page.borrow_mut();
        page.set_status(messages::NEED_INPUT_STATUS);
        page.show_message(messages::NEED_INPUT);
        Ok(SearchOutcome::NeedsInput)
    }

    /// Clear previous results, then draw `sites` and center on the first one.
    pub fn render_results(&self, sites: &[Site]) -> usize {
        self.clear_results();

        let view = render(sites, &self.style);
        let mut map = self.map.borrow_mut();
        let mut page = self.page.borrow_mut();
        let mut markers = self.markers.borrow_mut();

        if let Some(center) = view.center {
            map.set_center(center);
        }
        for entry in &view.entries {
            page.append_entry(entry);
        }
        for marker in &view.markers {
            markers.push(map.add_marker(marker));
        }

        *self.results.borrow_mut() = sites.to_vec();
        debug!("Rendered {} sites", view.len());
        view.len()
    }

    pub fn clear_results(&self) {
        let mut map = self.map.borrow_mut();
        for id in self.markers.borrow_mut().drain(..) {
            map.remove_marker(id);
        }
        self.results.borrow_mut().clear();
        let mut page = self.page.borrow_mut();
        page.clear_list();
        page.clear_message();
    }

    pub fn double_click(&self, at: LngLat) {
        self.gesture.borrow_mut().place(at);
        self.map.borrow_mut().show_pin(at, &self.pin_color);
        self.page.borrow_mut().clear_search_text();
    }

    pub fn touch_start(&self, at: LngLat) -> PressId {
        self.gesture.borrow_mut().touch_start(at, Instant::now())
    }

    pub fn touch_end(&self) {
        self.gesture.borrow_mut().touch_end();
    }

    /// Wait out the hold duration for `press`. Returns whether a pin was dropped.
    pub async fn hold(&self, press: PressId) -> bool {
        tokio::time::sleep(HOLD_DURATION).await;
        let placed = self.gesture.borrow_mut().hold_elapsed(press, Instant::now());
        match placed {
            Some(at) => {
                self.map.borrow_mut().show_pin(at, &self.pin_color);
                self.page.borrow_mut().clear_search_text();
                true
            }
            None => false,
        }
    }

    /// Typing in the search field takes the pin off the map.
    pub fn search_text_changed(&self) {
        if self.gesture.borrow_mut().clear() {
            debug!("Pin cleared by typing");
            self.map.borrow_mut().hide_pin();
        }
    }

    /// Flip list visibility. Returns the new state.
    pub fn toggle_list(&self) -> bool {
        let visible = !self.list_visible.get();
        self.list_visible.set(visible);

        let mut page = self.page.borrow_mut();
        page.set_list_visible(visible);
        page.set_status(if visible {
            messages::HIDE_LIST
        } else {
            messages::SHOW_LIST
        });
        visible
    }

    fn begin_search(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.page.borrow_mut().set_status(messages::SEARCHING);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn finish_search(
        &self,
        generation: u64,
        mode: Mode,
        result: reefscout_client::error::Result<Vec<Site>>,
    ) -> Result<SearchOutcome, SearchError> {
        if !self.is_current(generation) {
            warn!(
                "Dropping response for search #{}, #{} is newer",
                generation,
                self.generation.get()
            );
            return Ok(SearchOutcome::Stale);
        }

        let sites = match result {
            Ok(sites) => sites,
            Err(e) => {
                warn!("Search #{} failed: {}", generation, e);
                // Earlier results stay up
                let mut page = self.page.borrow_mut();
                page.show_message(messages::SEARCH_FAILED);
                page.set_status(messages::SHOW_LIST);
                return Err(e.into());
            }
        };

        if sites.is_empty() {
            info!("Search #{} found nothing", generation);
            self.clear_results();
            let message = match mode {
                Mode::Location => messages::no_nearby_sites(self.settings.radius),
                Mode::Text => messages::NO_TEXT_MATCHES.to_string(),
            };
            let mut page = self.page.borrow_mut();
            page.show_message(&message);
            page.set_status(messages::SHOW_LIST);
            return Ok(SearchOutcome::Empty);
        }

        let count = self.render_results(&sites);
        let zoom = match mode {
            Mode::Location => self.settings.location_zoom,
            Mode::Text => self.settings.text_zoom,
        };
        self.map.borrow_mut().set_zoom(zoom);

        self.list_visible.set(true);
        let mut page = self.page.borrow_mut();
        page.set_list_visible(true);
        page.set_status(messages::HIDE_LIST);

        info!("Search #{} rendered {} sites", generation, count);
        Ok(SearchOutcome::Rendered { count })
    }
}
