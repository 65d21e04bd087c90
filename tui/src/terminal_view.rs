//! Terminal render target: keeps the last view state and draws it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use slidedeck_core::{LiveRegion, RenderTarget, Slide, SlideMarker, ViewState};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Screen regions of the presenter, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub strip: Rect,
    pub previous: Rect,
    pub progress: Rect,
    pub next: Rect,
    pub live: Rect,
}

impl Regions {
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(10),
                Constraint::Min(10),
                Constraint::Length(10),
            ])
            .split(rows[3]);

        Self {
            header: rows[0],
            body: rows[1],
            strip: rows[2],
            previous: footer[0],
            progress: footer[1],
            next: footer[2],
            live: rows[4],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entrance {
    started: Instant,
    duration: Duration,
}

impl Entrance {
    /// Fraction of the effect elapsed, or `None` once it has finished.
    fn phase(&self, now: Instant) -> Option<f64> {
        if self.duration.is_zero() {
            return None;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f64()
            / self.duration.as_secs_f64();
        (t < 1.0).then_some(t)
    }
}

pub struct TerminalView {
    view: Option<ViewState>,
    effect_duration: Duration,
    entrance: Option<Entrance>,
}

impl TerminalView {
    pub fn new(effect_duration: Duration) -> Self {
        Self {
            view: None,
            effect_duration,
            entrance: None,
        }
    }

    pub fn view(&self) -> Option<&ViewState> {
        self.view.as_ref()
    }

    pub fn effect_running(&self, now: Instant) -> bool {
        self.entrance.and_then(|e| e.phase(now)).is_some()
    }

    pub fn draw(
        &self,
        f: &mut Frame,
        deck_title: &str,
        slide: &Slide,
        region: &LiveRegion,
        clock: Option<&str>,
    ) {
        let Some(view) = &self.view else {
            return;
        };
        let regions = Regions::split(f.area());

        self.draw_header(f, regions.header, deck_title, clock);
        self.draw_body(f, regions.body, slide);
        f.render_widget(slide_strip(view), regions.strip);
        f.render_widget(
            nav_button("◀ Prev", view.previous_enabled),
            regions.previous,
        );
        f.render_widget(nav_button("Next ▶", view.next_enabled), regions.next);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(view.progress_rounded().min(100))
            .label(format!("{}%", view.progress_rounded()));
        f.render_widget(gauge, regions.progress);

        // polite live region: updated in place, never focused
        let live = Paragraph::new(region.text())
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        f.render_widget(live, regions.live);
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, deck_title: &str, clock: Option<&str>) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut spans = vec![Span::styled(
            deck_title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(clock) = clock {
            let used = deck_title.width() + clock.width();
            let pad = usize::from(inner.width).saturating_sub(used);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(
                clock.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn draw_body(&self, f: &mut Frame, area: Rect, slide: &Slide) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(slide.title.as_str());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut style = Style::default();
        let mut offset = 0;
        if let Some(t) = self.entrance.and_then(|e| e.phase(Instant::now())) {
            // rise into place from two rows below
            offset = ((1.0 - t) * 2.0).round() as u16;
            if t < 0.5 {
                style = style.add_modifier(Modifier::DIM);
            }
        }
        let text_area = Rect {
            y: inner.y.saturating_add(offset),
            height: inner.height.saturating_sub(offset),
            ..inner
        };

        let body = Paragraph::new(slide.body.as_str())
            .style(style)
            .wrap(Wrap { trim: false });
        f.render_widget(body, text_area);
    }
}

impl RenderTarget for TerminalView {
    fn apply_view(&mut self, view: &ViewState) {
        self.view = Some(view.clone());
    }

    fn replay_entrance(&mut self, _index: usize) {
        self.entrance = Some(Entrance {
            started: Instant::now(),
            duration: self.effect_duration,
        });
    }
}

fn slide_strip(view: &ViewState) -> Paragraph<'static> {
    let spans: Vec<Span> = view
        .markers
        .iter()
        .map(|marker| match marker {
            SlideMarker::Active => Span::styled(
                "■ ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            SlideMarker::Prior => Span::styled("▪ ", Style::default().fg(Color::Gray)),
            SlideMarker::Unmarked => Span::styled("· ", Style::default().fg(Color::DarkGray)),
        })
        .collect();
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn nav_button(label: &'static str, enabled: bool) -> Paragraph<'static> {
    let style = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_runs_for_configured_duration() {
        let mut view = TerminalView::new(Duration::from_millis(800));
        assert!(!view.effect_running(Instant::now()));

        view.replay_entrance(0);
        assert!(view.effect_running(Instant::now()));
        assert!(!view.effect_running(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn zero_duration_disables_effect() {
        let mut view = TerminalView::new(Duration::ZERO);
        view.replay_entrance(0);
        assert!(!view.effect_running(Instant::now()));
    }

    #[test]
    fn regions_tile_the_screen() {
        let r = Regions::split(Rect::new(0, 0, 80, 24));
        assert_eq!(r.header.height, 3);
        assert_eq!(r.live.y, 23);
        assert_eq!(r.previous.width, 10);
        assert_eq!(r.next.x, 70);
        assert_eq!(r.body.height, 24 - 3 - 1 - 3 - 1);
    }
}
