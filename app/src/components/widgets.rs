//! Stateless input widgets for the settings form.
//!
//! Each widget receives its current value and an [`EventHandler`], and holds
//! no state of its own. The widgets are generic over [`StyleCatalog`], so
//! they can only ever emit catalog members.

use dioxus::prelude::*;

use folio_types::StyleCatalog;

/// DOM id of the sidebar toggle. The outside-click dismisser treats this
/// element as part of the panel's scope so the toggle alone owns open/close
/// transitions for clicks on the arrow.
pub const ARROW_BUTTON_ID: &str = "article-params-arrow";

/// Arrow affordance that opens and closes the sidebar.
#[component]
pub fn ArrowButton(is_open: bool, on_press: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            id: "{ARROW_BUTTON_ID}",
            class: if is_open { "arrow-button arrow-button--open" } else { "arrow-button" },
            r#type: "button",
            onclick: move |e| on_press.call(e),
            span { class: "arrow-glyph",
                if is_open { "«" } else { "»" }
            }
        }
    }
}

/// Single-select dropdown over one option catalog.
#[component]
pub fn StyleSelect<T: StyleCatalog>(
    title: &'static str,
    selected: T,
    on_change: EventHandler<T>,
) -> Element {
    rsx! {
        div { class: "field-group",
            span { class: "field-title", "{title}" }
            select {
                class: "style-select",
                value: "{selected.css_value()}",
                onchange: move |e| {
                    // Unknown values cannot come out of the markup below, but
                    // the lookup keeps the emit-catalog-members-only contract
                    // explicit.
                    if let Some(option) = T::from_css_value(&e.value()) {
                        on_change.call(option);
                    }
                },
                for entry in T::all().iter().copied() {
                    option {
                        key: "{entry.css_value()}",
                        value: "{entry.css_value()}",
                        selected: entry == selected,
                        "{entry.label()}"
                    }
                }
            }
        }
    }
}

/// Radio-group selector over one option catalog.
#[component]
pub fn StyleRadioGroup<T: StyleCatalog>(
    title: &'static str,
    name: &'static str,
    selected: T,
    on_change: EventHandler<T>,
) -> Element {
    rsx! {
        div { class: "field-group",
            span { class: "field-title", "{title}" }
            div { class: "radio-group",
                for entry in T::all().iter().copied() {
                    label {
                        key: "{entry.css_value()}",
                        class: if entry == selected { "radio-option radio-option--checked" } else { "radio-option" },
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{entry.css_value()}",
                            checked: entry == selected,
                            onchange: move |_| on_change.call(entry),
                        }
                        "{entry.label()}"
                    }
                }
            }
        }
    }
}

/// Form action button (Apply/Reset).
#[component]
pub fn ActionButton(
    title: &'static str,
    html_type: &'static str,
    kind: &'static str,
    #[props(default)] on_press: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        button {
            class: "action-button action-button--{kind}",
            r#type: "{html_type}",
            onclick: move |e| {
                if let Some(handler) = on_press {
                    handler.call(e);
                }
            },
            "{title}"
        }
    }
}

/// Horizontal rule between form sections.
#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "separator" }
    }
}
