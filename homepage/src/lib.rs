//! # homepage-leptos
//!
//! Leptos SSR renderer for the React Native website homepage.
//!
//! The page is built from small component functions (hero banner, feature
//! rows, promo blocks, community showcase, call to action) fed by an explicit
//! [`SiteConfig`]. Output is plain static HTML; no reactive runtime or
//! hydration is involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use homepage_leptos::{render_homepage, types::{AppEntry, SiteConfig}};
//!
//! let config = SiteConfig {
//!     base_url: "/".into(),
//!     users: vec![AppEntry {
//!         name: "App1".into(),
//!         icon: "a.png".into(),
//!         info_link: "https://x".into(),
//!         pinned: true,
//!     }],
//! };
//!
//! let html = render_homepage(&config);
//! assert!(html.contains(r#"src="/img/showcase/a.png""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Config records, feature records, style modifiers
//! - [`config`] - Loading [`SiteConfig`] from TOML or JSON
//! - [`components`] - Leptos UI components
//! - [`markdown`] - Markdown to HTML for content blocks
//! - [`styles`] - CSS constants

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod markdown;
pub mod styles;
pub mod types;

use components::{HomePage, HomepageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use config::ConfigError;
pub use types::SiteConfig;

/// Render the complete homepage document, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use homepage_leptos::{render_homepage, SiteConfig};
///
/// let html = render_homepage(&SiteConfig::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_homepage(config: &SiteConfig) -> String {
    let doc = view! { <HomepageDocument config=config.clone() /> };
    let html = doc.to_html();
    debug!(bytes = html.len(), "rendered homepage document");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the page body: the root `<div>` holding hero and `<main>`.
pub fn render_index(config: &SiteConfig) -> String {
    view! { <HomePage config=config.clone() /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::AppEntry;

    fn example_config() -> SiteConfig {
        SiteConfig {
            base_url: "/".into(),
            users: vec![
                AppEntry {
                    name: "App1".into(),
                    icon: "a.png".into(),
                    info_link: "https://x".into(),
                    pinned: true,
                },
                AppEntry {
                    name: "App2".into(),
                    icon: "http://b/img.png".into(),
                    info_link: "https://y".into(),
                    pinned: false,
                },
            ],
        }
    }

    #[test]
    fn renders_document_shell() {
        let html = render_homepage(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<style>"));
        assert!(html.contains("React Native"));
    }

    #[test]
    fn community_shows_single_pinned_app() {
        let html = render_index(&example_config());

        assert_eq!(html.matches(r#"class="item""#).count(), 1);
        assert!(html.contains(r#"src="/img/showcase/a.png""#));
        assert!(html.contains(r#"href="https://x""#));
        assert!(!html.contains("http://b/img.png"));
        assert!(!html.contains(r#"href="https://y""#));
    }

    #[test]
    fn sections_in_document_order() {
        let html = render_index(&example_config());
        assert!(html.starts_with("<div>"));

        let order = [
            "HeaderHero",
            "<main>",
            "Section Feature",
            "CodeReloadDemo",
            "DocsAndTalks",
            "Section Community",
            "GetStarted",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn header_is_outside_main() {
        let html = render_index(&example_config());
        let header_end = html.find("</header>").expect("header");
        let main = html.find("<main>").expect("main");
        assert!(header_end < main);
        assert!(html.ends_with("</main></div>"));
    }

    #[test]
    fn document_wraps_the_index_body() {
        let config = example_config();
        let doc = render_homepage(&config);
        let body = render_index(&config);
        assert!(doc.contains(&body));
    }
}
