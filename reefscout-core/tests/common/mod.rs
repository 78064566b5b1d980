// Fakes shared by the controller and bucket list tests

#![allow(dead_code)]

use reefscout_client::error::Result;
use reefscout_client::{ClientError, LngLat, Site, SiteBackend, SiteId};
use reefscout_core::{AlertKind, ListEntry, MapPort, MarkerId, MarkerSpec, PagePort};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

pub fn site(id: u64, name: &str, lng: f64, lat: f64) -> Site {
    Site {
        id: SiteId::from(id),
        name: name.to_string(),
        lat,
        lng,
    }
}

#[derive(Debug, Clone)]
pub enum Reply {
    Sites(Vec<Site>),
    Message(String),
    Fail(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Nearby { at: LngLat, dist: u32 },
    Text(String),
    Add(SiteId),
    Remove(SiteId),
}

/// Backend that answers from a script, in call order.
#[derive(Default)]
pub struct FakeBackend {
    replies: Mutex<VecDeque<(Duration, Reply)>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.reply_after(Duration::ZERO, reply)
    }

    pub fn reply_after(self, delay: Duration, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back((delay, reply));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: Call) -> Reply {
        self.calls.lock().unwrap().push(call.clone());
        let (delay, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {:?}", call));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply
    }

    async fn sites(&self, call: Call) -> Result<Vec<Site>> {
        match self.answer(call).await {
            Reply::Sites(sites) => Ok(sites),
            Reply::Fail(status) => Err(ClientError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            other => panic!("expected a site list reply, got {:?}", other),
        }
    }

    async fn message(&self, call: Call) -> Result<String> {
        match self.answer(call).await {
            Reply::Message(message) => Ok(message),
            Reply::Fail(status) => Err(ClientError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            other => panic!("expected a message reply, got {:?}", other),
        }
    }
}

impl SiteBackend for FakeBackend {
    async fn search_nearby(&self, at: LngLat, dist: u32) -> Result<Vec<Site>> {
        self.sites(Call::Nearby { at, dist }).await
    }

    async fn search_text(&self, text: &str) -> Result<Vec<Site>> {
        self.sites(Call::Text(text.to_string())).await
    }

    async fn bucket_list_add(&self, id: &SiteId) -> Result<String> {
        self.message(Call::Add(id.clone())).await
    }

    async fn bucket_list_remove(&self, id: &SiteId) -> Result<String> {
        self.message(Call::Remove(id.clone())).await
    }
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub center: Option<LngLat>,
    pub zoom: Option<f64>,
    pub markers: BTreeMap<u64, MarkerSpec>,
    pub pin: Option<LngLat>,
    pub pin_color: Option<String>,
    pub removed: usize,
    next_id: u64,
}

impl RecordingMap {
    pub fn marker_names(&self) -> Vec<String> {
        self.markers.values().map(|m| m.popup_label.clone()).collect()
    }
}

impl MapPort for RecordingMap {
    fn set_center(&mut self, center: LngLat) {
        self.center = Some(center);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = Some(zoom);
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerId {
        self.next_id += 1;
        self.markers.insert(self.next_id, marker.clone());
        MarkerId(self.next_id)
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if self.markers.remove(&id.0).is_some() {
            self.removed += 1;
        }
    }

    fn show_pin(&mut self, at: LngLat, color: &str) {
        self.pin = Some(at);
        self.pin_color = Some(color.to_string());
    }

    fn hide_pin(&mut self) {
        self.pin = None;
    }
}

#[derive(Debug, Default)]
pub struct RecordingPage {
    pub entries: Vec<ListEntry>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub list_visible: Option<bool>,
    pub search_text_cleared: usize,
    pub alerts: Vec<(AlertKind, String)>,
}

impl RecordingPage {
    pub fn with_entries(entries: Vec<ListEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }
}

impl PagePort for RecordingPage {
    fn clear_list(&mut self) {
        self.entries.clear();
    }

    fn append_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn remove_entry(&mut self, id: &SiteId) {
        self.entries.retain(|entry| &entry.site_id != id);
    }

    fn show_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn set_status(&mut self, label: &str) {
        self.status = Some(label.to_string());
    }

    fn set_list_visible(&mut self, visible: bool) {
        self.list_visible = Some(visible);
    }

    fn clear_search_text(&mut self) {
        self.search_text_cleared += 1;
    }

    fn show_alert(&mut self, kind: AlertKind, message: &str) {
        self.alerts.push((kind, message.to_string()));
    }
}
