//! Article presentation settings sidebar.
//!
//! Edits accumulate in a local draft and reach the host page only on Apply;
//! Reset reverts both the draft and the host to the defaults. Clicking
//! outside the open sidebar closes it without discarding the draft.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use folio_types::{ArticleStyle, PanelState, StyleChange};

use crate::components::widgets::{
    ARROW_BUTTON_ID, ActionButton, ArrowButton, Separator, StyleRadioGroup, StyleSelect,
};
use crate::dismiss::OutsideClickGuard;

/// DOM id of the sidebar element, used for outside-click containment checks.
pub const SIDEBAR_ID: &str = "article-params-sidebar";

/// Elements the dismisser treats as inside the panel's scope.
const DISMISS_SCOPE: &[&str] = &[SIDEBAR_ID, ARROW_BUTTON_ID];

#[component]
pub fn ArticleParamsForm(
    current_style: ArticleStyle,
    on_apply: EventHandler<ArticleStyle>,
    on_reset: EventHandler<()>,
) -> Element {
    // Seeded from the committed style once at mount. Deliberately not
    // re-seeded when the host changes the committed style through another
    // channel: that would clobber in-progress edits.
    let mut panel = use_signal(|| PanelState::new(current_style));

    // The outside-click listener lives exactly as long as the panel is open:
    // attached on every false→true transition of `is_open`, dropped (and
    // unregistered) on any transition back, including unmount.
    let is_open = use_memo(move || panel.read().is_open);
    let mut dismisser = use_signal(|| None::<OutsideClickGuard>);
    use_effect(move || {
        if is_open() {
            dismisser.set(OutsideClickGuard::attach(DISMISS_SCOPE, panel));
        } else {
            dismisser.set(None);
        }
    });

    let draft = panel.read().draft;
    let open = is_open();

    rsx! {
        ArrowButton {
            is_open: open,
            on_press: move |_| {
                panel.with_mut(|state| state.toggle_open());
                debug!("sidebar toggled, open: {}", panel.read().is_open);
            },
        }
        aside {
            id: "{SIDEBAR_ID}",
            class: if open { "sidebar sidebar--open" } else { "sidebar" },
            form {
                class: "sidebar-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    let applied = panel.with_mut(|state| state.apply());
                    on_apply.call(applied);
                },
                h2 { class: "sidebar-title", "Customize appearance" }

                StyleSelect {
                    title: "Font",
                    selected: draft.font_family,
                    on_change: move |option| {
                        panel.with_mut(|state| state.set_option(StyleChange::FontFamily(option)));
                    },
                }
                Separator {}

                StyleRadioGroup {
                    title: "Font size",
                    name: "font-size",
                    selected: draft.font_size,
                    on_change: move |option| {
                        panel.with_mut(|state| state.set_option(StyleChange::FontSize(option)));
                    },
                }
                Separator {}

                StyleSelect {
                    title: "Font color",
                    selected: draft.font_color,
                    on_change: move |option| {
                        panel.with_mut(|state| state.set_option(StyleChange::FontColor(option)));
                    },
                }
                Separator {}

                StyleSelect {
                    title: "Background color",
                    selected: draft.background_color,
                    on_change: move |option| {
                        panel.with_mut(|state| {
                            state.set_option(StyleChange::BackgroundColor(option));
                        });
                    },
                }
                Separator {}

                StyleSelect {
                    title: "Content width",
                    selected: draft.content_width,
                    on_change: move |option| {
                        panel.with_mut(|state| state.set_option(StyleChange::ContentWidth(option)));
                    },
                }

                div { class: "sidebar-actions",
                    ActionButton {
                        title: "Reset",
                        html_type: "reset",
                        kind: "clear",
                        on_press: move |e: MouseEvent| {
                            e.prevent_default();
                            let restored = panel.with_mut(|state| state.reset());
                            debug!("draft reset to defaults: {restored:?}");
                            on_reset.call(());
                        },
                    }
                    ActionButton {
                        title: "Apply",
                        html_type: "submit",
                        kind: "apply",
                    }
                }
            }
        }
    }
}
