use crate::{config::settings::EngineSettings, scroll::viewport::Viewport};

/// How the scroll-spy walks the navigation ids when looking for the active section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanStrategy {
    /// Authored order; the first section whose `[top, bottom)` contains the probe wins.
    FirstMatchTopDown,
    /// Reverse authored order; the first section (from the end) with `top <= probe` wins.
    ///
    /// Keeps the last section active past the end of the page.
    #[default]
    LastMatchBottomUp,
}

/// Active-section detection and scroll-target math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy {
    /// Scan order.
    pub strategy: ScanStrategy,
    /// Distance below the header bottom where the probe sits.
    pub probe_offset: f64,
    /// Gap left above a section when scrolling to it.
    pub breathing_room: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl ScrollSpy {
    /// Spy configured from the engine constants.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            strategy: settings.scroll_spy_strategy,
            probe_offset: settings.probe_offset,
            breathing_room: settings.scroll_breathing_room,
        }
    }

    /// Document offset used to decide which section is "in view".
    pub fn probe(&self, scroll_y: f64, header_height: f64) -> f64 {
        scroll_y + header_height + self.probe_offset
    }

    /// Find the active id among `ids` (authored order) for the given probe.
    ///
    /// Ids without a rendered section are skipped. `None` means no section matched and the
    /// caller should keep whatever was active before.
    pub fn scan<'a, I>(&self, ids: I, probe: f64, viewport: &dyn Viewport) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut ids = ids.into_iter();
        match self.strategy {
            ScanStrategy::FirstMatchTopDown => ids.find(|id| {
                viewport
                    .section_rect(id)
                    .is_some_and(|rect| rect.contains(probe))
            }),
            ScanStrategy::LastMatchBottomUp => ids.rev().find(|id| {
                viewport
                    .section_rect(id)
                    .is_some_and(|rect| rect.top <= probe)
            }),
        }
    }

    /// Scroll offset that brings a section whose document top is `section_top` just below a
    /// header of `header_height`.
    pub fn scroll_target(&self, section_top: f64, header_height: f64) -> f64 {
        (section_top - (header_height + self.breathing_room)).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/spy.rs"]
mod tests;
