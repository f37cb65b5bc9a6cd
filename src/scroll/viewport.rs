use std::collections::HashMap;

use crate::foundation::core::{SectionRect, stack_rects};

/// The live document surface the scroll logic reads from.
///
/// Reads are synchronous layout queries taken at callback time; `scroll_to` is the only write.
pub trait Viewport {
    /// Rendered height of the page header, or `None` when there is no header element.
    fn header_height(&self) -> Option<f64>;

    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Document-relative extent of the element with anchor id `id`, if rendered.
    fn section_rect(&self, id: &str) -> Option<SectionRect>;

    /// Request a smooth scroll to document offset `top`.
    fn scroll_to(&mut self, top: f64);
}

/// In-memory [`Viewport`] with fixed geometry.
///
/// `scroll_to` jumps immediately and is recorded in [`StaticViewport::scroll_requests`].
#[derive(Clone, Debug, Default)]
pub struct StaticViewport {
    header_height: Option<f64>,
    scroll_y: f64,
    rects: HashMap<String, SectionRect>,
    scroll_requests: Vec<f64>,
}

impl StaticViewport {
    /// Empty document without header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay sections out contiguously, top to bottom, starting at `first_top`.
    pub fn stacked<S: AsRef<str>>(first_top: f64, sections: &[(S, f64)]) -> Self {
        let heights: Vec<f64> = sections.iter().map(|(_, h)| *h).collect();
        let rects = sections
            .iter()
            .zip(stack_rects(first_top, &heights))
            .map(|((id, _), rect)| (id.as_ref().to_string(), rect))
            .collect();
        Self {
            rects,
            ..Self::default()
        }
    }

    /// Builder-style header height.
    pub fn with_header(mut self, height: f64) -> Self {
        self.header_height = Some(height);
        self
    }

    /// Replace (or remove) the header.
    pub fn set_header_height(&mut self, height: Option<f64>) {
        self.header_height = height;
    }

    /// Move the scroll position.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Insert or replace a section rect.
    pub fn insert_rect(&mut self, id: impl Into<String>, rect: SectionRect) {
        self.rects.insert(id.into(), rect);
    }

    /// Every `scroll_to` target requested so far.
    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }
}

impl Viewport for StaticViewport {
    fn header_height(&self) -> Option<f64> {
        self.header_height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self.rects.get(id).copied()
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
        self.set_scroll_y(top);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/viewport.rs"]
mod tests;
