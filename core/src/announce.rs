//! Assistive-technology announcement sink.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    /// Read when the user is idle; never steals focus.
    #[default]
    Polite,
    Assertive,
}

pub trait Announcer {
    fn announce(&mut self, text: &str, politeness: Politeness);
}

/// A single reusable announcement region. Created once during setup and
/// overwritten in place on every announcement.
#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    text: String,
    politeness: Politeness,
    updates: u64,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    /// Number of announcements delivered so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Announcer for LiveRegion {
    fn announce(&mut self, text: &str, politeness: Politeness) {
        self.text.clear();
        self.text.push_str(text);
        self.politeness = politeness;
        self.updates += 1;
    }
}
