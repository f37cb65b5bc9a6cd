use crate::scroll::viewport::Viewport;

/// Last measured height of the page header.
///
/// Re-measured on mount, scroll and resize. When the document has no header element the last
/// known value (initially the configured default) is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderHeightTracker {
    height: f64,
}

impl HeaderHeightTracker {
    /// Tracker holding `default_height` until the first successful measurement.
    pub fn new(default_height: f64) -> Self {
        Self {
            height: default_height,
        }
    }

    /// Read the header height from `viewport` and return the (possibly unchanged) value.
    pub fn measure(&mut self, viewport: &dyn Viewport) -> f64 {
        match viewport.header_height() {
            Some(h) if h.is_finite() && h >= 0.0 => self.height = h,
            Some(h) => tracing::debug!(height = h, "ignoring invalid header measurement"),
            None => tracing::trace!("no header element, keeping last height"),
        }
        self.height
    }

    /// Current value without re-measuring.
    pub fn current(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/header.rs"]
mod tests;
