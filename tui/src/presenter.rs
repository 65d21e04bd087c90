use crate::events::{map_event, Action, CellMetrics};
use crate::terminal_view::{Regions, TerminalView};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use slidedeck_common::PresenterConfig;
use slidedeck_core::{
    ButtonSource, InputRouter, KeySource, LiveRegion, SlideController, SlideSet, Subscription,
    SwipeSource,
};
use std::io::{self, Stdout};
use tokio::time::{interval, Duration};
use tracing::{debug, info};

/// Owns the terminal for as long as it lives; restores it on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn area(&self) -> Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

pub struct SlidePresenter {
    deck_title: String,
    controller: SlideController<TerminalView, LiveRegion>,
    router: InputRouter,
    subscriptions: Vec<Subscription>,
    cells: CellMetrics,
    tick_rate: Duration,
    show_clock: bool,
    should_quit: bool,
}

impl SlidePresenter {
    pub fn new(deck_title: impl Into<String>, slides: SlideSet, config: &PresenterConfig) -> Self {
        let view = TerminalView::new(Duration::from_millis(config.entrance_effect_ms));
        // the announcement region exists before the first render
        let live_region = LiveRegion::new();
        let controller = SlideController::new(slides, view, live_region);

        let router = InputRouter::new();
        let subscriptions = vec![
            router.subscribe(ButtonSource),
            router.subscribe(KeySource),
            router.subscribe(SwipeSource::new(config.swipe_threshold_px)),
        ];

        Self {
            deck_title: deck_title.into(),
            controller,
            router,
            subscriptions,
            cells: CellMetrics::from_width(config.cell_width_px),
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
            show_clock: config.show_clock,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &SlideController<TerminalView, LiveRegion> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SlideController<TerminalView, LiveRegion> {
        &mut self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route one terminal event. Every resulting transition is applied before
    /// this returns.
    pub fn handle_event(&mut self, event: &Event, area: Rect) {
        match map_event(event, &Regions::split(area), self.cells) {
            Action::Quit => self.should_quit = true,
            Action::Input(input) => {
                for command in self.router.dispatch(&input) {
                    self.controller.apply(command);
                }
            }
            Action::Ignore => {}
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let clock = self
            .show_clock
            .then(|| chrono::Local::now().format("%H:%M").to_string());
        self.controller.target().draw(
            f,
            &self.deck_title,
            self.controller.current_slide(),
            self.controller.announcer(),
            clock.as_deref(),
        );
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::acquire()?;
        let mut events = EventStream::new();
        let mut tick = interval(self.tick_rate);

        info!(
            slides = self.controller.total(),
            "presenter started; keys: ← → navigate, Home/End first/last, q quit"
        );

        while !self.should_quit {
            guard.terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tick.tick() => {}
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        let area = guard.area()?;
                        self.handle_event(&event, area);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
            }
        }

        self.release_inputs();
        Ok(())
    }

    /// Drop every input subscription. Called on teardown.
    pub fn release_inputs(&mut self) {
        let released = self.subscriptions.len();
        self.subscriptions.clear();
        debug!(released, "input subscriptions released");
    }
}
