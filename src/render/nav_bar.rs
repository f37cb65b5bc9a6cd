use maud::{Markup, html};

use crate::nav::derive::{NavEntry, NavTarget};

/// Sticky navigation bar. Scroll entries link to `#<id>`; download entries carry
/// `data-download` and never point at an anchor.
pub fn render_nav_bar(entries: &[NavEntry], active_id: Option<&str>) -> Markup {
    html! {
        header class="page-header" {
            nav class="page-nav" {
                ul {
                    @for e in entries {
                        li {
                            @match &e.target {
                                NavTarget::Scroll => {
                                    a.nav-link.active[active_id == Some(e.id.as_str())]
                                        href={ "#" (e.id) } data-nav-id=(e.id) { (e.label) }
                                }
                                NavTarget::Download(action) => {
                                    a.nav-link.nav-download
                                        href=[action.href()]
                                        data-nav-id=(e.id)
                                        data-download=(action.name()) { (e.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
