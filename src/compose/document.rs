use std::path::Path;

use maud::{DOCTYPE, Markup, html};

use crate::{
    compose::composer::ComposedPage,
    foundation::error::{PageError, PageResult},
};

/// Full HTML document for a composed page.
pub fn render_document(page: &ComposedPage) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.brand) " " (page.product_name) }
            }
            body {
                main class="product-page" {
                    @for s in &page.sections {
                        (s.markup)
                    }
                }
            }
        }
    }
}

/// Render `page` and write it to `path`, creating parent directories.
pub fn write_document(page: &ComposedPage, path: impl AsRef<Path>) -> PageResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            PageError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(path, render_document(page).into_string())
        .map_err(|e| PageError::render(format!("write '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/document.rs"]
mod tests;
