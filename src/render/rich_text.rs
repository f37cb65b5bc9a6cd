use maud::{Markup, html};

/// Renders authored rich-text bodies.
///
/// The page engine only hands the raw content over; markup conventions are up to the
/// implementation.
pub trait RichText {
    /// Render `content` into a block carrying the CSS class `class`.
    fn render(&self, content: &str, class: &str) -> Markup;
}

/// Plain-text renderer: escapes everything, blank lines separate paragraphs, single newlines
/// become `<br>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRichText;

impl RichText for PlainRichText {
    fn render(&self, content: &str, class: &str) -> Markup {
        html! {
            div class=(class) {
                @for para in paragraphs(content) {
                    p {
                        @for (i, line) in para.iter().enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                }
            }
        }
    }
}

fn paragraphs(content: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/rich_text.rs"]
mod tests;
