//! "Give it a try" closing section

use leptos::prelude::*;

use super::{Heading, HomeCallToAction, Section};
use crate::types::Background;

const INSTALL_COMMANDS: [&str; 2] = ["npm install -g react-native", "react-native init MyTestApp"];

#[component]
pub fn GetStarted(#[prop(into)] base_url: String) -> impl IntoView {
    view! {
        <Section class_name="GetStarted" background=Background::Dark>
            <div class="content">
                <Heading text="Give it a try" />
                <ol class="steps">
                    <li>
                        <p>"Run this"</p>
                        <div class="terminal">
                            {INSTALL_COMMANDS
                                .iter()
                                .map(|cmd| view! { <code>{*cmd}</code> })
                                .collect::<Vec<_>>()}
                        </div>
                    </li>
                    <li>
                        <p>"Read these"</p>
                        <HomeCallToAction base_url=base_url />
                    </li>
                </ol>
            </div>
        </Section>
    }
}
