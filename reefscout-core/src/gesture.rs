use crate::model::PinState;
use reefscout_client::LngLat;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// How long a touch must be held before it drops a pin.
pub const HOLD_DURATION: Duration = Duration::from_millis(500);

/// Identifies one touch press so a late timer cannot act on a newer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressId(u64);

#[derive(Debug, Clone, Copy)]
struct Press {
    id: PressId,
    at: LngLat,
    started: Instant,
}

/// Pin placement state driven by double-click, touch-hold and typing.
#[derive(Debug, Default)]
pub struct PinGesture {
    pin: PinState,
    press: Option<Press>,
    presses: u64,
}

impl PinGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self) -> PinState {
        self.pin
    }

    pub fn place(&mut self, at: LngLat) {
        debug!("Pin placed at {}", at);
        self.pin = PinState {
            placed: true,
            coordinate: at,
        };
    }

    /// Remove the pin. Returns whether one was placed.
    pub fn clear(&mut self) -> bool {
        let was_placed = self.pin.placed;
        self.pin.placed = false;
        was_placed
    }

    pub fn touch_start(&mut self, at: LngLat, now: Instant) -> PressId {
        self.presses += 1;
        let id = PressId(self.presses);
        self.press = Some(Press {
            id,
            at,
            started: now,
        });
        id
    }

    pub fn touch_end(&mut self) {
        self.press = None;
    }

    /// Place the pin if press `id` is still held and has lasted [`HOLD_DURATION`].
    pub fn hold_elapsed(&mut self, id: PressId, now: Instant) -> Option<LngLat> {
        let press = self.press?;
        if press.id != id || now.duration_since(press.started) < HOLD_DURATION {
            return None;
        }
        self.press = None;
        self.place(press.at);
        Some(press.at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_clear() {
        let mut gesture = PinGesture::new();
        assert_eq!(gesture.pin().location(), None);

        gesture.place(LngLat::new(1.0, 2.0));
        assert_eq!(gesture.pin().location(), Some(LngLat::new(1.0, 2.0)));

        assert!(gesture.clear());
        assert!(!gesture.clear());
        assert_eq!(gesture.pin().location(), None);
    }

    #[test]
    fn test_hold_places_pin_after_duration() {
        let mut gesture = PinGesture::new();
        let start = Instant::now();
        let id = gesture.touch_start(LngLat::new(3.0, 4.0), start);

        assert_eq!(gesture.hold_elapsed(id, start + Duration::from_millis(499)), None);
        assert_eq!(
            gesture.hold_elapsed(id, start + HOLD_DURATION),
            Some(LngLat::new(3.0, 4.0))
        );
        assert!(gesture.pin().placed);
    }

    #[test]
    fn test_released_press_places_nothing() {
        let mut gesture = PinGesture::new();
        let start = Instant::now();
        let id = gesture.touch_start(LngLat::new(3.0, 4.0), start);
        gesture.touch_end();

        assert_eq!(gesture.hold_elapsed(id, start + HOLD_DURATION), None);
        assert!(!gesture.pin().placed);
    }

    #[test]
    fn test_newer_press_supersedes_older() {
        let mut gesture = PinGesture::new();
        let start = Instant::now();
        let first = gesture.touch_start(LngLat::new(1.0, 1.0), start);
        let second = gesture.touch_start(LngLat::new(2.0, 2.0), start);

        assert_eq!(gesture.hold_elapsed(first, start + HOLD_DURATION), None);
        assert_eq!(
            gesture.hold_elapsed(second, start + HOLD_DURATION),
            Some(LngLat::new(2.0, 2.0))
        );
    }
}
