//! Community section with the pinned showcase apps

use leptos::prelude::*;

use super::{Heading, Section, TwoColumns};
use crate::markdown::MarkdownBlock;
use crate::types::{AppEntry, Background};

const COMMUNITY_TEXT: &str = r#"
In 2018, React Native had the [2nd highest] number of contributors
for any repos in GitHub. However, there are a few standout
companies which partner with Facebook to create React Native:
[Callstack], [Expo], [Infinite Red], [Microsoft], and [Software
Mansion].
"#;

/// Icon gallery linking to each app
#[component]
pub fn AppList(apps: Vec<AppEntry>, #[prop(into)] base_url: String) -> impl IntoView {
    view! {
        <ul class="AppList">
            {apps.into_iter().map(|app| {
                let src = app.image_source(&base_url);
                view! {
                    <li class="item">
                        <a href=app.info_link>
                            <img src=src alt=app.name />
                        </a>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}

/// "Open Community" section. `apps` should already be the pinned subset.
#[component]
pub fn Community(apps: Vec<AppEntry>, #[prop(into)] base_url: String) -> impl IntoView {
    let about = view! {
        <p class="firstP">
            <img src=format!("{}img/homepage/fb-logo.png", base_url) />
            <span>"React Native was built by Facebook and has been maintained for over 5 years."</span>
        </p>
        <MarkdownBlock text=COMMUNITY_TEXT />
    }
    .into_any();
    let showcase_url = format!("{}showcase", base_url);
    let gallery = view! {
        <p>
            "React Native is being used in thousands of apps, but it's likely you've already used it in one of these apps:"
        </p>
        <AppList apps=apps base_url=base_url />
        <p>"and " <a href=showcase_url>"many more"</a> "."</p>
    }
    .into_any();

    view! {
        <Section class_name="Community" background=Background::Light2 bottom_spacing=true>
            <div class="content">
                <Heading text="Open Community" />
                <TwoColumns column_one=about column_two=gallery />
            </div>
        </Section>
    }
}
