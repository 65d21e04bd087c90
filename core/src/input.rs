//! Input adapters: raw events in, controller commands out.

pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    JumpTo(usize),
    JumpToLast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    MoveRight,
    MoveLeft,
    GoToStart,
    GoToEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click(NavButton),
    Key(NavKey),
    /// Screen coordinates in pixels.
    TouchStart { x: f64, y: f64 },
    TouchEnd { x: f64, y: f64 },
}

pub trait InputAdapter {
    fn translate(&mut self, event: &InputEvent) -> Option<Command>;
}

#[derive(Debug, Default)]
pub struct ButtonSource;

impl InputAdapter for ButtonSource {
    fn translate(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::Click(NavButton::Previous) => Some(Command::Retreat),
            InputEvent::Click(NavButton::Next) => Some(Command::Advance),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct KeySource;

impl InputAdapter for KeySource {
    fn translate(&mut self, event: &InputEvent) -> Option<Command> {
        let InputEvent::Key(key) = event else {
            return None;
        };
        Some(match key {
            NavKey::MoveRight => Command::Advance,
            NavKey::MoveLeft => Command::Retreat,
            NavKey::GoToStart => Command::JumpTo(0),
            NavKey::GoToEnd => Command::JumpToLast,
        })
    }
}

/// Horizontal swipe detector. Only displacement strictly beyond the
/// threshold counts; swiping left moves forward. A release with no recorded
/// start (e.g. the release after a button click) is ignored.
#[derive(Debug)]
pub struct SwipeSource {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeSource {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classify(&self, delta: f64) -> Option<Command> {
        if delta < -self.threshold {
            Some(Command::Advance)
        } else if delta > self.threshold {
            Some(Command::Retreat)
        } else {
            None
        }
    }
}

impl Default for SwipeSource {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl InputAdapter for SwipeSource {
    fn translate(&mut self, event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::TouchStart { x, .. } => {
                self.start_x = Some(x);
                None
            }
            InputEvent::TouchEnd { x, .. } => {
                let start = self.start_x.take()?;
                self.classify(x - start)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(source: &mut SwipeSource, from: f64, to: f64) -> Option<Command> {
        assert_eq!(
            source.translate(&InputEvent::TouchStart { x: from, y: 10.0 }),
            None
        );
        source.translate(&InputEvent::TouchEnd { x: to, y: 10.0 })
    }

    #[test]
    fn swipe_left_past_threshold_advances() {
        let mut source = SwipeSource::default();
        assert_eq!(swipe(&mut source, 300.0, 200.0), Some(Command::Advance));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut source = SwipeSource::default();
        assert_eq!(swipe(&mut source, 300.0, 270.0), None);
        // exactly at the threshold does not count
        assert_eq!(swipe(&mut source, 300.0, 250.0), None);
        assert_eq!(swipe(&mut source, 300.0, 350.0), None);
    }

    #[test]
    fn swipe_right_retreats() {
        let mut source = SwipeSource::default();
        assert_eq!(swipe(&mut source, 100.0, 151.0), Some(Command::Retreat));
    }

    #[test]
    fn release_without_start_is_ignored() {
        let mut source = SwipeSource::default();
        assert_eq!(
            source.translate(&InputEvent::TouchEnd { x: 600.0, y: 10.0 }),
            None
        );
        // a start is consumed by exactly one release
        assert_eq!(swipe(&mut source, 300.0, 200.0), Some(Command::Advance));
        assert_eq!(
            source.translate(&InputEvent::TouchEnd { x: 0.0, y: 10.0 }),
            None
        );
    }

    #[test]
    fn custom_threshold() {
        let mut source = SwipeSource::new(10.0);
        assert_eq!(swipe(&mut source, 300.0, 270.0), Some(Command::Advance));
    }

    #[test]
    fn keys_and_buttons_map_to_commands() {
        let mut keys = KeySource;
        assert_eq!(
            keys.translate(&InputEvent::Key(NavKey::MoveRight)),
            Some(Command::Advance)
        );
        assert_eq!(
            keys.translate(&InputEvent::Key(NavKey::GoToStart)),
            Some(Command::JumpTo(0))
        );
        assert_eq!(
            keys.translate(&InputEvent::Key(NavKey::GoToEnd)),
            Some(Command::JumpToLast)
        );
        assert_eq!(keys.translate(&InputEvent::Click(NavButton::Next)), None);

        let mut buttons = ButtonSource;
        assert_eq!(
            buttons.translate(&InputEvent::Click(NavButton::Previous)),
            Some(Command::Retreat)
        );
        assert_eq!(buttons.translate(&InputEvent::Key(NavKey::MoveLeft)), None);
    }
}
