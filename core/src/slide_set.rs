//! The fixed, ordered sequence of slides a session presents.

use crate::error::{DeckError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Immutable, non-empty list of slides.
#[derive(Debug, Clone)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    /// Build a set from raw slide bodies, numbering ids from `slide-1`.
    pub fn from_bodies<I, S>(bodies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides = bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| make_slide(i, body.into()))
            .collect();
        Self::new(slides)
    }

    /// Split markdown into slides at every `## ` heading.
    pub fn parse_markdown(content: &str) -> Result<Self> {
        let mut bodies = Vec::new();
        let mut current = String::new();

        for line in content.lines() {
            if line.starts_with("## ") && !current.trim().is_empty() {
                bodies.push(current.trim().to_string());
                current.clear();
            }
            current.push_str(line);
            current.push('\n');
        }

        if !current.trim().is_empty() {
            bodies.push(current.trim().to_string());
        }

        Self::from_bodies(bodies)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_markdown(&content)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

impl std::ops::Index<usize> for SlideSet {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

fn make_slide(index: usize, body: String) -> Slide {
    let title = body
        .lines()
        .find(|l| l.starts_with('#'))
        .map(|l| l.trim_start_matches('#').trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("Slide {}", index + 1));
    Slide {
        id: format!("slide-{}", index + 1),
        title,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_second_level_headings() {
        let md = "# Deck\n\n## Intro\n- one\n\n## Body\ntext\n\n## End\n";
        let set = SlideSet::parse_markdown(md).unwrap();
        assert_eq!(set.len(), 4);
        // preamble becomes the title slide
        assert_eq!(set[0].body, "# Deck");
        assert_eq!(set[0].title, "Deck");
        assert_eq!(set[1].body, "## Intro\n- one");
        assert_eq!(set[2].title, "Body");
        assert_eq!(set[3].id, "slide-4");

        let md = "## Only\ntext\n## Second\n";
        let set = SlideSet::parse_markdown(md).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].title, "Only");
    }

    #[test]
    fn file_without_headings_is_one_slide() {
        let set = SlideSet::parse_markdown("just some text\nmore").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].title, "Slide 1");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            SlideSet::parse_markdown("  \n\n"),
            Err(DeckError::EmptyDeck)
        ));
        assert!(matches!(SlideSet::new(Vec::new()), Err(DeckError::EmptyDeck)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.md");
        std::fs::write(&path, "## A\n\n## B\n").unwrap();
        let set = SlideSet::load(&path).unwrap();
        assert_eq!(set.last_index(), 1);

        let missing = SlideSet::load(dir.path().join("nope.md"));
        assert!(matches!(missing, Err(DeckError::Io(_))));
    }
}
