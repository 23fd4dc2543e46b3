//! Static article body.
//!
//! Pure markup; its appearance is driven entirely by the CSS variables the
//! page container sets from the committed style.

use dioxus::prelude::*;

#[component]
pub fn Article() -> Element {
    rsx! {
        article { class: "article",
            h1 { class: "article-title", "On the Shape of Reading" }
            p { class: "article-lead",
                "Typography is the quiet half of writing. Long before a reader "
                "weighs an argument, the page has already told them whether the "
                "next ten minutes will be comfortable."
            }
            p {
                "A paragraph set too wide forces the eye to make long, uncertain "
                "return sweeps; set too narrow, it chops thought into confetti. "
                "Between those failures sits a band of measures where reading "
                "stops being work, and the width that lands there depends on the "
                "typeface, its size, and the contrast it is given to stand on."
            }
            div { class: "article-figure" }
            p {
                "None of these choices are universal. A serif that flatters a "
                "printed essay can turn muddy on a dim screen; a color scheme "
                "that rests one reader's eyes strains another's. The honest "
                "answer is to let the reader decide: hand them the type, the "
                "size, the colors, and the measure, and apply nothing until they "
                "ask for it."
            }
            p {
                "That is what the panel in the corner of this page does. Open "
                "it, push the draft around as far as you like, and the article "
                "will not move a pixel until you press Apply. If the experiment "
                "goes wrong, Reset returns the page to the shape it started in."
            }
        }
    }
}
