//! Slide-index state machine.
//!
//! States are the indices `0..N`. `advance` and `retreat` saturate at the
//! ends, `jump_to` ignores out-of-range targets. Rejected transitions change
//! nothing and render nothing.

use crate::announce::{Announcer, Politeness};
use crate::input::Command;
use crate::slide_set::{Slide, SlideSet};
use crate::view::ViewState;
use tracing::{debug, trace};

pub trait RenderTarget {
    fn apply_view(&mut self, view: &ViewState);

    /// Restart the cosmetic entrance effect for the slide now shown.
    fn replay_entrance(&mut self, _index: usize) {}
}

pub struct SlideController<R, A> {
    slides: SlideSet,
    current: usize,
    target: R,
    announcer: A,
}

impl<R, A> SlideController<R, A>
where
    R: RenderTarget,
    A: Announcer,
{
    /// Takes ownership of the render target and an already initialised
    /// announcer, then renders the first slide.
    pub fn new(slides: SlideSet, target: R, announcer: A) -> Self {
        let mut controller = Self {
            slides,
            current: 0,
            target,
            announcer,
        };
        controller.render();
        controller
    }

    pub fn advance(&mut self) -> bool {
        if self.current < self.slides.last_index() {
            self.current += 1;
            self.accepted("advance");
            true
        } else {
            trace!(index = self.current, "advance ignored at last slide");
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            self.accepted("retreat");
            true
        } else {
            trace!("retreat ignored at first slide");
            false
        }
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            self.accepted("jump");
            true
        } else {
            trace!(index, total = self.slides.len(), "jump target out of range");
            false
        }
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::JumpTo(index) => self.jump_to(index),
            Command::JumpToLast => self.jump_to(self.slides.last_index()),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn view(&self) -> ViewState {
        ViewState::derive(self.current, self.slides.len())
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Give back the render target and announcer at teardown.
    pub fn into_parts(self) -> (R, A) {
        (self.target, self.announcer)
    }

    fn accepted(&mut self, kind: &str) {
        debug!(kind, index = self.current, total = self.slides.len(), "slide transition");
        self.render();
    }

    fn render(&mut self) {
        let view = self.view();
        self.target.apply_view(&view);
        self.announcer.announce(&view.announcement, Politeness::Polite);
        self.target.replay_entrance(self.current);
    }
}
