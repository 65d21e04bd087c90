//! View state derived from the navigation index.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideMarker {
    Active,
    Prior,
    Unmarked,
}

/// Everything a render target needs after a transition. Recomputed from
/// `(current_index, total)` every time, never stored by the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub current_index: usize,
    pub total: usize,
    pub markers: Vec<SlideMarker>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub progress_percent: f64,
    pub announcement: String,
}

impl ViewState {
    /// `total` must be at least 1 and `current_index < total`.
    pub fn derive(current_index: usize, total: usize) -> Self {
        let markers = (0..total)
            .map(|i| match i.cmp(&current_index) {
                std::cmp::Ordering::Less => SlideMarker::Prior,
                std::cmp::Ordering::Equal => SlideMarker::Active,
                std::cmp::Ordering::Greater => SlideMarker::Unmarked,
            })
            .collect();

        Self {
            current_index,
            total,
            markers,
            previous_enabled: !is_first(current_index),
            next_enabled: !is_last(current_index, total),
            progress_percent: progress_percent(current_index, total),
            announcement: announcement(current_index, total),
        }
    }

    pub fn is_first(&self) -> bool {
        is_first(self.current_index)
    }

    pub fn is_last(&self) -> bool {
        is_last(self.current_index, self.total)
    }

    pub fn progress_rounded(&self) -> u16 {
        self.progress_percent.round() as u16
    }

    pub fn active_count(&self) -> usize {
        self.markers
            .iter()
            .filter(|m| **m == SlideMarker::Active)
            .count()
    }
}

fn is_first(index: usize) -> bool {
    index == 0
}

fn is_last(index: usize, total: usize) -> bool {
    index + 1 == total
}

pub fn progress_percent(index: usize, total: usize) -> f64 {
    (index + 1) as f64 * 100.0 / total as f64
}

pub fn announcement(index: usize, total: usize) -> String {
    format!("Slide {} of {}", index + 1, total)
}
