//! Top-level page.
//!
//! Owns the committed article style and projects it onto the page container
//! as CSS variables; the article stylesheet consumes those variables, so a
//! commit re-styles the document without touching its markup.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use folio_types::{ArticleStyle, StyleCatalog};

use crate::components::{Article, ArticleParamsForm};

static CSS: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    // Committed style: the single source of truth the article renders from.
    // The settings form edits a local draft and only writes back here on
    // Apply (or Reset, which converges on the defaults).
    let mut article_style = use_signal(ArticleStyle::default);

    let style = article_style();
    let style_vars = format!(
        "--font-family: {}; --font-size: {}; --font-color: {}; --container-width: {}; --bg-color: {};",
        style.font_family.css_value(),
        style.font_size.css_value(),
        style.font_color.css_value(),
        style.content_width.css_value(),
        style.background_color.css_value(),
    );

    rsx! {
        link { rel: "stylesheet", href: CSS }
        main { class: "page", style: "{style_vars}",
            ArticleParamsForm {
                current_style: style,
                on_apply: move |new_style: ArticleStyle| {
                    info!("applying article style: {new_style:?}");
                    article_style.set(new_style);
                },
                on_reset: move |_| {
                    info!("resetting article style to defaults");
                    article_style.set(ArticleStyle::default());
                },
            }
            Article {}
        }
    }
}
