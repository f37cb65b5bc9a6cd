/// Vertical extent of a rendered section, in document coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionRect {
    /// Distance from the top of the document to the section's top edge.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl SectionRect {
    /// Negative heights are clamped to zero.
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    /// Exclusive lower edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }
}

/// Stack sections of the given heights contiguously, starting at `first_top`.
pub fn stack_rects(first_top: f64, heights: &[f64]) -> Vec<SectionRect> {
    let mut top = first_top;
    heights
        .iter()
        .map(|&h| {
            let rect = SectionRect::new(top, h);
            top = rect.bottom();
            rect
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
