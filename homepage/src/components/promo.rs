//! Static promo blocks: code reloading demo and docs/talks

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;
use leptos::tachys::view::add_attr::AddAnyAttr;

use super::{Heading, Section, TwitterButton, TwoColumns};
use crate::types::Background;

const CODE_RELOAD_GIF: &str = "https://media.giphy.com/media/13WZniThXy0hSE/giphy.gif";
const TALK_EMBED: &str = "https://www.youtube.com/embed/NCAY0HIfrwc";
const TALK_LINK: &str = "https://youtu.be/NCAY0HIfrwc";

/// Dark banner with the code reloading animation
#[component]
pub fn CodeReloadDemo() -> impl IntoView {
    view! {
        <Section class_name="CodeReloadDemo" background=Background::Dark>
            <Heading text="Speed up your work with code reloading" />
            <img src=CODE_RELOAD_GIF />
        </Section>
    }
}

/// Docs and talks links next to an embedded conference talk
#[component]
pub fn DocsAndTalks() -> impl IntoView {
    let docs = view! {
        <Heading text="Docs and Talks" />
        <p>"[get list of docs]"</p>
        <p>"[get list of talks]"</p>
        <p>"You can follow the latest news from the React Native team on Twitter"</p>
        <TwitterButton show_count=true />
    }
    .into_any();
    // no typed builder for the legacy frameborder attribute
    let embed = view! {
        <iframe
            src=TALK_EMBED
            allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
            allowfullscreen=true
        ></iframe>
    }
    .add_any_attr(custom_attribute("frameborder", "0"));
    let talk = view! {
        {embed}
        <p>
            <a href=TALK_LINK>"Mobile innovation with React Native... at f8"</a>
        </p>
    }
    .into_any();

    view! {
        <Section class_name="DocsAndTalks" background=Background::Light>
            <TwoColumns reverse=true column_one=docs column_two=talk />
        </Section>
    }
}
