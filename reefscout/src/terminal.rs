//! Ports that draw the map and page as lines of terminal text.

use colored::{ColoredString, Colorize};
use reefscout_core::{AlertKind, ListEntry, LngLat, MapPort, MarkerId, MarkerSpec, PagePort, SiteId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use url::Url;

/// Output shared by the map and page ports, printed once a step finishes.
#[derive(Debug, Clone, Default)]
pub struct Transcript(Rc<RefCell<Vec<String>>>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: impl Into<String>) {
        self.0.borrow_mut().push(line.into());
    }

    pub fn drain(&self) -> Vec<String> {
        self.0.borrow_mut().drain(..).collect()
    }

    pub fn print(&self) {
        for line in self.drain() {
            println!("{}", line);
        }
    }
}

/// The text search input, shared between the prompt and the page port.
#[derive(Debug, Clone, Default)]
pub struct SearchField(Rc<RefCell<String>>);

impl SearchField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.0.borrow_mut() = text.into();
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

fn link(href: &str, base_url: Option<&Url>) -> String {
    base_url
        .and_then(|base| base.join(href).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| href.to_string())
}

/// Parse a `#RRGGBB` color.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: &str, color: &str) -> ColoredString {
    match parse_hex_color(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

pub fn format_entry(entry: &ListEntry, base_url: Option<&Url>) -> String {
    format!(
        "  {} {}  {}",
        "•".cyan(),
        entry.label.bright_white().bold(),
        link(&entry.href, base_url).dimmed()
    )
}

pub fn format_marker(marker: &MarkerSpec, base_url: Option<&Url>) -> String {
    format!(
        "  {} {} ({})  {}",
        paint("◆", &marker.color),
        marker.popup_label,
        marker.position,
        link(&marker.popup_href, base_url).dimmed()
    )
}

pub fn format_alert(kind: AlertKind, message: &str) -> String {
    match kind {
        AlertKind::Info => format!("{} {}", "ℹ".blue().bold(), message),
        AlertKind::Error => format!("{} {}", "✗".red().bold(), message.red()),
    }
}

pub struct TerminalMap {
    transcript: Transcript,
    base_url: Option<Url>,
    next_marker: u64,
    center: LngLat,
    zoom: f64,
}

impl TerminalMap {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            base_url: None,
            next_marker: 0,
            center: LngLat::default(),
            zoom: 0.0,
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn center(&self) -> LngLat {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl MapPort for TerminalMap {
    fn set_center(&mut self, center: LngLat) {
        self.center = center;
        debug!("Map centered on {}", center);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        debug!("Map zoom {}", zoom);
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerId {
        self.next_marker += 1;
        self.transcript
            .push(format_marker(marker, self.base_url.as_ref()));
        MarkerId(self.next_marker)
    }

    fn remove_marker(&mut self, id: MarkerId) {
        debug!("Marker {} removed", id.0);
    }

    fn show_pin(&mut self, at: LngLat, color: &str) {
        self.transcript
            .push(format!("{} Pin dropped at {}", paint("●", color), at));
    }

    fn hide_pin(&mut self) {
        self.transcript.push(format!("{} Pin removed", "→".blue()));
    }
}

#[derive(Debug)]
struct PageState {
    entries: Vec<ListEntry>,
    status: String,
    list_visible: bool,
}

/// The results list, message area and alerts.
///
/// Clones draw onto the same page, so the bucket list buttons and the search
/// controller see one list.
#[derive(Debug, Clone)]
pub struct TerminalPage {
    transcript: Transcript,
    search_field: SearchField,
    base_url: Option<Url>,
    state: Rc<RefCell<PageState>>,
}

impl TerminalPage {
    pub fn new(transcript: Transcript, search_field: SearchField) -> Self {
        Self {
            transcript,
            search_field,
            base_url: None,
            state: Rc::new(RefCell::new(PageState {
                entries: Vec::new(),
                status: String::new(),
                list_visible: true,
            })),
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn entries(&self) -> Vec<ListEntry> {
        self.state.borrow().entries.clone()
    }

    pub fn status(&self) -> String {
        self.state.borrow().status.clone()
    }

    pub fn list_visible(&self) -> bool {
        self.state.borrow().list_visible
    }

    fn print_entries(&self, entries: &[ListEntry]) {
        for entry in entries {
            self.transcript
                .push(format_entry(entry, self.base_url.as_ref()));
        }
    }
}

impl PagePort for TerminalPage {
    fn clear_list(&mut self) {
        self.state.borrow_mut().entries.clear();
    }

    fn append_entry(&mut self, entry: &ListEntry) {
        let mut state = self.state.borrow_mut();
        if state.list_visible {
            self.print_entries(std::slice::from_ref(entry));
        }
        state.entries.push(entry.clone());
    }

    fn remove_entry(&mut self, id: &SiteId) {
        let mut state = self.state.borrow_mut();
        let before = state.entries.len();
        state.entries.retain(|entry| &entry.site_id != id);

        if state.entries.len() != before && state.list_visible {
            self.transcript
                .push(format!("{} {} site(s) in the list", "→".blue(), state.entries.len()));
            self.print_entries(&state.entries);
        }
    }

    fn show_message(&mut self, message: &str) {
        self.transcript.push(message.yellow().to_string());
    }

    fn clear_message(&mut self) {}

    fn set_status(&mut self, label: &str) {
        debug!("Status: {}", label);
        self.state.borrow_mut().status = label.to_string();
    }

    fn set_list_visible(&mut self, visible: bool) {
        let mut state = self.state.borrow_mut();
        if visible && !state.list_visible {
            self.print_entries(&state.entries);
        }
        state.list_visible = visible;
    }

    fn clear_search_text(&mut self) {
        self.search_field.clear();
    }

    fn show_alert(&mut self, kind: AlertKind, message: &str) {
        self.transcript.push(format_alert(kind, message));
    }
}
