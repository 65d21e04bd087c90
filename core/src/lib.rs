//! Slide navigation core: the slide set, the index state machine, derived
//! view state and the input adapters that drive it.

pub mod announce;
pub mod controller;
pub mod error;
pub mod input;
pub mod slide_set;
pub mod subscription;
pub mod view;

pub use announce::{Announcer, LiveRegion, Politeness};
pub use controller::{RenderTarget, SlideController};
pub use error::{DeckError, Result};
pub use input::{
    ButtonSource, Command, InputAdapter, InputEvent, KeySource, NavButton, NavKey, SwipeSource,
};
pub use slide_set::{Slide, SlideSet};
pub use subscription::{InputRouter, Subscription};
pub use view::{SlideMarker, ViewState};
