//! Twitter follow button
//!
//! Emits a plain anchor plus the widgets script. The script loads
//! asynchronously and upgrades the anchor into the live widget; if it never
//! loads the anchor stays a normal link.

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;
use leptos::tachys::view::add_attr::AddAnyAttr;

const FOLLOW_URL: &str = "https://twitter.com/reactnative?ref_src=twsrc%5Etfw";
const WIDGETS_SCRIPT: &str = "https://platform.twitter.com/widgets.js";

/// Follow @reactnative button
#[component]
pub fn TwitterButton(
    /// Show the follower count next to the button
    #[prop(optional)]
    show_count: bool,
) -> impl IntoView {
    let script = view! { <script async=true src=WIDGETS_SCRIPT></script> }
        .add_any_attr(custom_attribute("charset", "utf-8"));

    view! {
        <a
            href=FOLLOW_URL
            class="twitter-follow-button"
            data-size="large"
            data-show-count=show_count.to_string()
        >
            "Follow @reactnative"
        </a>
        {script}
    }
}
