//! Header hero: logo, title, tagline and the primary calls to action

use leptos::prelude::*;

use super::{Section, TwitterButton, TwoColumns};
use crate::types::{Background, SectionElement};

const LOGO_COLOR: &str = "#61dafb";

/// Styled link button
#[component]
pub fn ActionButton(
    #[prop(into)] href: String,
    #[prop(default = "_self")] target: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a class="ActionButton" href=href target=target>
            {children()}
        </a>
    }
}

/// "Get started" / "Learn basics" button pair
#[component]
pub fn HomeCallToAction(#[prop(into)] base_url: String) -> impl IntoView {
    view! {
        <div>
            <ActionButton href=format!("{}docs/getting-started", base_url)>
                "Get started"
            </ActionButton>
            <ActionButton href=format!("{}docs/tutorial", base_url)>
                "Learn basics"
            </ActionButton>
        </div>
    }
}

/// Atom logo: centre dot and three orbits rotated by 60 degrees.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg
            width="300"
            height="300"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="-11.5 -10.23174 23 20.46348"
        >
            <title>"React Logo"</title>
            <circle cx="0" cy="0" r="2.05" fill=LOGO_COLOR />
            <g stroke=LOGO_COLOR stroke-width="1" fill="none">
                <ellipse rx="11" ry="4.2" />
                <ellipse rx="11" ry="4.2" transform="rotate(60)" />
                <ellipse rx="11" ry="4.2" transform="rotate(120)" />
            </g>
        </svg>
    }
}

/// Top-of-page hero banner
#[component]
pub fn HeaderHero(#[prop(into)] base_url: String) -> impl IntoView {
    let logo = view! { <Logo /> }.into_any();
    let intro = view! {
        <h1 class="title">"React Native"</h1>
        <p class="tagline">"Learn once, write everywhere."</p>
        <div class="buttons">
            <HomeCallToAction base_url=base_url />
        </div>
    }
    .into_any();

    view! {
        <Section
            element=SectionElement::Header
            background=Background::Dark
            class_name="HeaderHero"
            bottom_spacing=true
        >
            <div class="socialLinks">
                <TwitterButton />
            </div>
            <TwoColumns reverse=true column_one=logo column_two=intro />
        </Section>
    }
}
