//! Server-side rendering into complete HTML documents.
//!
//! Dioxus renders the page body; the document shell around it is plain markup.

use crate::components::{LandingPage, NotFoundPage, ToolPage};
use dioxus::prelude::*;
use iet_catalog::Registry;
use iet_domain::NavItem;
use iet_domain::config::SiteInfo;

const STYLESHEET: &str = "/assets/site.css";

fn document(title: &str, body: Element) -> String {
    let body = dioxus_ssr::render_element(body);
    let title = escape(title);

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"{STYLESHEET}\">\
         </head><body class=\"min-h-screen bg-gray-50\">{body}</body></html>"
    )
}

/// Minimal HTML text escaping for content placed outside the Dioxus tree.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The landing grid as a full page.
#[must_use]
pub fn render_landing(registry: Registry, site: &SiteInfo) -> String {
    let info = site.clone();

    document(&site.title, rsx! {
        LandingPage { registry: registry, site: info }
    })
}

/// The placeholder page of one registered route.
#[must_use]
pub fn render_tool(registry: Registry, site: &SiteInfo, item: &NavItem) -> String {
    let title = format!("{} · {}", item.title, site.title);
    let item = *item;

    document(&title, rsx! {
        ToolPage { registry: registry, item: item }
    })
}

/// The 404 page; the sidebar still highlights whatever section prefix-matches `path`.
#[must_use]
pub fn render_not_found(registry: Registry, site: &SiteInfo, path: &str) -> String {
    let title = format!("Not found · {}", site.title);
    let path = path.to_owned();

    document(&title, rsx! {
        NotFoundPage { registry: registry, path: path }
    })
}
