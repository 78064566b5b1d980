use reefscout::handlers::*;
use reefscout::terminal::{SearchField, Transcript, format_alert, format_entry, parse_hex_color};
use reefscout_core::{AlertKind, ListEntry, LngLat, PagePort, SiteId};
use std::time::Duration;
use url::Url;

fn connection(base_url: &str) -> Connection {
    Connection {
        base_url: Url::parse(base_url).unwrap(),
        timeout: Duration::from_secs(5),
        session_cookie: None,
        radius: 100,
    }
}

#[test]
fn test_parse_lng_lat() {
    assert_eq!(parse_lng_lat("-80.1,25.7"), Ok(LngLat::new(-80.1, 25.7)));
    assert_eq!(parse_lng_lat(" -80.1 , 25.7 "), Ok(LngLat::new(-80.1, 25.7)));
}

#[test]
fn test_parse_lng_lat_missing_comma() {
    let result = parse_lng_lat("-80.1 25.7");
    assert!(result.unwrap_err().contains("expected LNG,LAT"));
}

#[test]
fn test_parse_lng_lat_invalid_number() {
    let result = parse_lng_lat("west,25.7");
    assert!(result.unwrap_err().contains("invalid longitude"));
}

#[test]
fn test_parse_lng_lat_out_of_range() {
    assert!(parse_lng_lat("200,0").unwrap_err().contains("longitude"));
    assert!(parse_lng_lat("0,-91").unwrap_err().contains("latitude"));
}

#[test]
fn test_client_config_carries_session() {
    let mut conn = connection("http://dive.example");
    conn.session_cookie = Some("session=xyz".to_string());

    let config = conn.client_config();
    assert_eq!(config.session_cookie.as_deref(), Some("session=xyz"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.base_url.as_str(), "http://dive.example/");
}

#[test]
fn test_settings_use_radius() {
    let mut conn = connection("http://dive.example");
    conn.radius = 40;
    assert_eq!(conn.settings().radius, 40);
}

#[test]
fn test_format_entry_links_to_server() {
    colored::control::set_override(false);
    let entry = ListEntry {
        site_id: SiteId::from(1),
        label: "Reef A".to_string(),
        href: "/sites/1".to_string(),
    };

    let base = Url::parse("http://dive.example").unwrap();
    let line = format_entry(&entry, Some(&base));
    assert!(line.contains("Reef A"));
    assert!(line.contains("http://dive.example/sites/1"));

    let line = format_entry(&entry, None);
    assert!(line.contains("/sites/1"));
}

#[test]
fn test_format_alert_kinds() {
    colored::control::set_override(false);
    assert_eq!(format_alert(AlertKind::Info, "Added"), "ℹ Added");
    assert_eq!(format_alert(AlertKind::Error, "Nope"), "✗ Nope");
}

#[test]
fn test_terminal_controller_starts_on_world_view() {
    let conn = connection("http://dive.example");
    let backend = conn.backend().unwrap();
    let transcript = Transcript::new();
    let controller = terminal_controller(&backend, &conn, &transcript, &SearchField::new());

    assert_eq!(controller.map().center(), LngLat::new(-170.0, 20.0));
    assert_eq!(controller.map().zoom(), 1.0);
    assert!(transcript.drain().is_empty());
}

#[test]
fn test_parse_hex_color() {
    assert_eq!(parse_hex_color("#8FC0A9"), Some((0x8F, 0xC0, 0xA9)));
    assert_eq!(parse_hex_color("#f78154"), Some((0xF7, 0x81, 0x54)));
    assert_eq!(parse_hex_color("green"), None);
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#zz0000"), None);
}

#[test]
fn test_terminal_page_clones_share_the_list() {
    colored::control::set_override(false);
    let conn = connection("http://dive.example");
    let transcript = Transcript::new();
    let mut results = terminal_page(&conn, &transcript, &SearchField::new());
    let mut buttons = results.clone();

    for id in [1, 2] {
        results.append_entry(&ListEntry {
            site_id: SiteId::from(id),
            label: format!("Reef {}", id),
            href: format!("/sites/{}", id),
        });
    }
    transcript.drain();

    buttons.remove_entry(&SiteId::from(1));

    let ids: Vec<_> = results.entries().into_iter().map(|e| e.site_id).collect();
    assert_eq!(ids, vec![SiteId::from(2)]);
    let lines = transcript.drain();
    assert!(lines.iter().any(|line| line.contains("1 site(s) in the list")));
    assert!(lines.iter().any(|line| line.contains("Reef 2")));
    assert!(!lines.iter().any(|line| line.contains("Reef 1")));
}
