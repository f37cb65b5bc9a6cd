use crate::{
    config::settings::EngineSettings,
    nav::{
        action::{DownloadAction, DownloadHandler},
        derive::{NavEntry, NavTarget},
    },
    scroll::{header::HeaderHeightTracker, spy::ScrollSpy, viewport::Viewport},
};

/// Ephemeral scroll state of one composed page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    header_height: f64,
    active_section_id: Option<String>,
}

impl ScrollState {
    /// Last good header measurement, in CSS pixels.
    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// `None` until a section has matched for the first time; never cleared afterwards.
    pub fn active_section_id(&self) -> Option<&str> {
        self.active_section_id.as_deref()
    }
}

/// Host callbacks the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// The document scrolled.
    Scroll,
    /// The window was resized.
    Resize,
}

/// Outcome of [`PageSession::activate`].
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    /// A smooth scroll to `top` was requested for section `id`.
    ScrolledTo {
        /// Target section id.
        id: String,
        /// Requested document offset.
        top: f64,
    },
    /// The entry's download action was handed to the handler.
    Download(DownloadAction),
    /// Unknown id, section not rendered, or session torn down.
    Ignored,
}

/// Owner of the [`ScrollState`] for a single page instance.
///
/// All geometry is read from the [`Viewport`] passed into each callback; nothing is cached
/// between calls except the header height and active id.
#[derive(Clone, Debug)]
pub struct PageSession {
    navigation: Vec<NavEntry>,
    spy: ScrollSpy,
    header: HeaderHeightTracker,
    state: ScrollState,
    mounted: bool,
    torn_down: bool,
}

impl PageSession {
    /// Unmounted session with the default header height.
    pub fn new(navigation: Vec<NavEntry>, settings: &EngineSettings) -> Self {
        let header = HeaderHeightTracker::new(settings.default_header_height);
        Self {
            navigation,
            spy: ScrollSpy::from_settings(settings),
            state: ScrollState {
                header_height: header.current(),
                active_section_id: None,
            },
            header,
            mounted: false,
            torn_down: false,
        }
    }

    /// Current scroll state.
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Navigation entries the session spies on.
    pub fn navigation(&self) -> &[NavEntry] {
        &self.navigation
    }

    /// Mounted and not torn down.
    pub fn is_active(&self) -> bool {
        self.mounted && !self.torn_down
    }

    /// Attach to the document: measure the header and run an initial scan.
    pub fn mount(&mut self, viewport: &dyn Viewport) {
        if self.torn_down {
            tracing::debug!("mount after teardown ignored");
            return;
        }
        self.mounted = true;
        self.state.header_height = self.header.measure(viewport);
        self.update_active(viewport);
    }

    /// Process one host event. Returns `false` when the event was ignored.
    pub fn handle(&mut self, event: PageEvent, viewport: &dyn Viewport) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state.header_height = self.header.measure(viewport);
        if event == PageEvent::Scroll {
            self.update_active(viewport);
        }
        true
    }

    /// React to a click on navigation entry `id`.
    ///
    /// Scroll targets are computed from the header height measured now, not the cached one.
    pub fn activate(
        &mut self,
        id: &str,
        viewport: &mut dyn Viewport,
        downloads: &mut dyn DownloadHandler,
    ) -> Activation {
        if !self.is_active() {
            return Activation::Ignored;
        }
        let Some(entry) = self.navigation.iter().find(|e| e.id == id) else {
            tracing::debug!(id, "activate: unknown navigation id");
            return Activation::Ignored;
        };
        match &entry.target {
            NavTarget::Download(action) => {
                let action = action.clone();
                action.dispatch(downloads);
                Activation::Download(action)
            }
            NavTarget::Scroll => {
                let Some(rect) = viewport.section_rect(id) else {
                    tracing::debug!(id, "activate: section not rendered");
                    return Activation::Ignored;
                };
                let header_height = self.header.measure(&*viewport);
                self.state.header_height = header_height;
                let top = self.spy.scroll_target(rect.top, header_height);
                viewport.scroll_to(top);
                Activation::ScrolledTo {
                    id: id.to_string(),
                    top,
                }
            }
        }
    }

    /// Detach; every later event or activation is ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    fn update_active(&mut self, viewport: &dyn Viewport) {
        let probe = self.spy.probe(viewport.scroll_y(), self.state.header_height);
        let ids = self
            .navigation
            .iter()
            .filter(|e| e.is_scroll_target())
            .map(|e| e.id.as_str())
            .collect::<Vec<_>>();
        if let Some(id) = self.spy.scan(ids, probe, viewport)
            && self.state.active_section_id.as_deref() != Some(id)
        {
            tracing::trace!(id, probe, "active section changed");
            self.state.active_section_id = Some(id.to_string());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/session.rs"]
mod tests;
