pub mod events;
pub mod presenter;
pub mod terminal_view;

use anyhow::{Context, Result};
use slidedeck_common::PresenterConfig;
use slidedeck_core::SlideSet;
use std::path::Path;

pub use presenter::SlidePresenter;
pub use terminal_view::TerminalView;

/// Present a markdown deck in the terminal. `start` is a 0-based slide to
/// open at; out-of-range values are ignored.
pub async fn run_presenter<P: AsRef<Path>>(
    file_path: P,
    config: &PresenterConfig,
    start: Option<usize>,
) -> Result<()> {
    let path = file_path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let slides = SlideSet::parse_markdown(&content)
        .with_context(|| format!("loading slides from {}", path.display()))?;

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slides".to_string());

    let mut presenter = SlidePresenter::new(title, slides, config);
    if let Some(index) = start {
        presenter.controller_mut().jump_to(index);
    }
    presenter.run().await
}
