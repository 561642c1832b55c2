//! Method catalog extraction from documentation markup.
//!
//! The documentation page is an unversioned contract: all knowledge of its
//! structure lives here so that layout drift only touches this file.
//!
//! Expected shape:
//!
//! ```html
//! <h2>API Methods</h2>
//! <div class="wspanel">
//!   <div class="package">
//!     <h3>Album</h3>
//!     <ul><li>album.getInfo</li><li>album.search</li></ul>
//!   </div>
//! </div>
//! ```

use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::catalog::MethodCatalog;
use crate::error::{ProgressError, Result};

const PANEL_CLASS: &str = "wspanel";
const PACKAGE_CLASS: &str = "package";
const PANEL_HEADING: &str = "API Methods";

/// Maximum number of characters of source carried in a parse error.
const FRAGMENT_LEN: usize = 200;

/// Extract the method catalog from a documentation page.
pub fn extract_catalog(html: &str) -> Result<MethodCatalog> {
    let document = Html::parse_document(html);

    let panel = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| has_class(el, PANEL_CLASS) && follows_methods_heading(el))
        .ok_or_else(|| parse_error(format!("Couldn't find {}", PANEL_CLASS), html))?;

    let mut catalog = MethodCatalog::new();
    // `descendants` yields the panel itself first.
    for package in panel
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| has_class(el, PACKAGE_CLASS))
    {
        let heading = child_element(&package, "h3")
            .ok_or_else(|| parse_error("Package without an h3 heading".to_string(), html))?;
        let list = child_element(&package, "ul")
            .ok_or_else(|| parse_error("Package without a method list".to_string(), html))?;

        let name = element_text(&heading);
        let methods: Vec<String> = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "li")
            .map(|li| element_text(&li))
            .filter(|text| !text.is_empty())
            .collect();

        debug!("Found category {} with {} methods", name, methods.len());
        if catalog.insert(name.clone(), methods).is_some() {
            warn!("Category '{}' listed more than once; keeping the last", name);
        }
    }

    Ok(catalog)
}

fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|value| value.contains(class))
}

/// Whether the nearest preceding sibling element is the `API Methods` heading.
///
/// Whitespace text between the heading and the panel is skipped; any other
/// node in between breaks the anchor.
fn follows_methods_heading(el: &ElementRef<'_>) -> bool {
    let mut prev = el.prev_sibling();
    while let Some(node) = prev {
        match node.value() {
            Node::Text(text) if text.trim().is_empty() => prev = node.prev_sibling(),
            Node::Element(_) => {
                return ElementRef::wrap(node).is_some_and(|heading| {
                    heading.value().name() == "h2" && element_text(&heading) == PANEL_HEADING
                });
            }
            _ => return false,
        }
    }
    false
}

fn child_element<'a>(parent: &ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn parse_error(message: String, html: &str) -> ProgressError {
    ProgressError::Parse {
        message,
        fragment: fragment(html),
    }
}

fn fragment(html: &str) -> String {
    match html.char_indices().nth(FRAGMENT_LEN) {
        Some((idx, _)) => format!("{}...", &html[..idx]),
        None => html.to_string(),
    }
}
