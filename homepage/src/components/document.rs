//! Page root and the complete HTML document

use leptos::prelude::*;

use super::{
    feature_records, CodeReloadDemo, Community, DocsAndTalks, FeatureList, GetStarted, HeaderHero,
};
use crate::styles::HOMEPAGE_CSS;
use crate::types::{AppEntry, SiteConfig};

const PAGE_TITLE: &str = "React Native · Learn once, write everywhere";

/// Homepage body, top to bottom in document order
#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    let base_url = config.base_url.clone();
    let apps: Vec<AppEntry> = config.pinned_apps().cloned().collect();

    view! {
        <div>
            <HeaderHero base_url=base_url.clone() />
            <main>
                <FeatureList features=feature_records(&base_url) />
                <CodeReloadDemo />
                <DocsAndTalks />
                <Community apps=apps base_url=base_url.clone() />
                <GetStarted base_url=base_url />
            </main>
        </div>
    }
}

/// The complete HTML document for the homepage
#[component]
pub fn HomepageDocument(config: SiteConfig) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{PAGE_TITLE}</title>
                <style>{HOMEPAGE_CSS}</style>
            </head>
            <body>
                <HomePage config=config />
            </body>
        </html>
    }
}
