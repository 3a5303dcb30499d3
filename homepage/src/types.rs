//! Homepage data types.
//!
//! Everything here is read-only once built:
//!
//! - [`SiteConfig`] / [`AppEntry`] come from the site configuration file
//! - [`FeatureRecord`] values are fixed content, built by
//!   [`crate::components::feature_records`]
//! - [`Background`], [`SectionElement`] and [`FeatureLayout`] are the small
//!   style vocabulary the layout components resolve into class names
//!
//! # Example
//!
//! ```rust
//! use homepage_leptos::types::{AppEntry, SiteConfig};
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
//! assert_eq!(config.pinned_apps().count(), 1);
//! assert_eq!(config.users[0].image_source(&config.base_url), "/img/showcase/a.png");
//! ```

use std::fmt;
use std::sync::Arc;

use leptos::prelude::AnyView;
use serde::Deserialize;

/// Icons starting with this are already absolute URLs.
const ABSOLUTE_URL_PREFIX: &str = "http";

/// Site-wide configuration consumed by the homepage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root path prefix under which pages and static assets are served
    #[serde(alias = "baseUrl")]
    pub base_url: String,
    /// Showcase apps, in configuration order
    pub users: Vec<AppEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".into(),
            users: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Apps flagged for the homepage gallery, in their configured order.
    pub fn pinned_apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.users.iter().filter(|app| app.pinned)
    }

    /// Join a site-relative path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// An app listed in the showcase.
///
/// Missing fields fall back to empty values; an entry without an icon still
/// renders, with a broken image reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppEntry {
    /// Display name, used as the image alt text
    pub name: String,
    /// Icon file name under `img/showcase/`, or an absolute URL
    pub icon: String,
    /// Link target for the gallery entry
    #[serde(alias = "infoLink")]
    pub info_link: String,
    /// Whether the app appears on the homepage
    pub pinned: bool,
}

impl AppEntry {
    /// Resolve the icon to an image source.
    ///
    /// Anything starting with `http` is taken as an absolute URL and returned
    /// unchanged; everything else is served from `<base_url>img/showcase/`.
    pub fn image_source(&self, base_url: &str) -> String {
        if self.icon.starts_with(ABSOLUTE_URL_PREFIX) {
            self.icon.clone()
        } else {
            format!("{}img/showcase/{}", base_url, self.icon)
        }
    }
}

/// Background shade of a page section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    Light,
    Light2,
    Dark,
}

impl Background {
    /// CSS class for this shade.
    pub fn class(self) -> &'static str {
        match self {
            Background::Light => "light",
            Background::Light2 => "light2",
            Background::Dark => "dark",
        }
    }
}

/// Tag used to wrap a page section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionElement {
    #[default]
    Section,
    Header,
}

/// Visual layout of a feature row, derived from its position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureLayout {
    pub background: Background,
    pub reverse: bool,
}

impl FeatureLayout {
    /// Even rows are light and reversed, odd rows light2 and in reading order.
    pub fn for_index(index: usize) -> Self {
        let even = index % 2 == 0;
        Self {
            background: if even {
                Background::Light
            } else {
                Background::Light2
            },
            reverse: even,
        }
    }
}

/// Zero-argument view builder used for rich feature images.
pub type ImageRenderer = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// The illustration shown next to a feature.
#[derive(Clone)]
pub enum FeatureImage {
    /// Plain image source
    Url(String),
    /// Custom markup, e.g. a code sample instead of a flat image
    Renderer(ImageRenderer),
}

impl FeatureImage {
    /// Wrap a view builder.
    pub fn renderer<F>(render: F) -> Self
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        FeatureImage::Renderer(Arc::new(render))
    }
}

impl fmt::Debug for FeatureImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureImage::Url(url) => f.debug_tuple("Url").field(url).finish(),
            FeatureImage::Renderer(_) => f.write_str("Renderer(..)"),
        }
    }
}

/// One row of the feature list.
#[derive(Clone, Debug)]
pub struct FeatureRecord {
    pub title: &'static str,
    /// Markdown body
    pub text: &'static str,
    pub image: FeatureImage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app(name: &str, icon: &str, pinned: bool) -> AppEntry {
        AppEntry {
            name: name.into(),
            icon: icon.into(),
            info_link: format!("https://example.com/{}", name),
            pinned,
        }
    }

    #[test]
    fn relative_icon_resolves_under_showcase_dir() {
        let entry = app("App1", "a.png", true);
        assert_eq!(entry.image_source("/"), "/img/showcase/a.png");
        assert_eq!(
            entry.image_source("/react-native/"),
            "/react-native/img/showcase/a.png"
        );
    }

    #[test]
    fn absolute_icon_is_unchanged() {
        let http = app("App2", "http://b/img.png", false);
        let https = app("App3", "https://cdn.example.com/icon.png", false);
        assert_eq!(http.image_source("/"), "http://b/img.png");
        assert_eq!(https.image_source("/docs/"), "https://cdn.example.com/icon.png");
    }

    #[test]
    fn any_http_prefix_counts_as_absolute() {
        let entry = app("Cdn", "httpcdn.png", true);
        assert_eq!(entry.image_source("/"), "httpcdn.png");

        let relative = app("Rel", "img/http.png", true);
        assert_eq!(relative.image_source("/"), "/img/showcase/img/http.png");
    }

    #[test]
    fn missing_icon_propagates_as_broken_reference() {
        let entry = app("NoIcon", "", true);
        assert_eq!(entry.image_source("/"), "/img/showcase/");
    }

    #[test]
    fn pinned_apps_is_a_stable_filter() {
        let config = SiteConfig {
            base_url: "/".into(),
            users: vec![
                app("A", "a.png", true),
                app("B", "b.png", false),
                app("C", "c.png", true),
                app("D", "d.png", false),
                app("E", "e.png", true),
            ],
        };
        let names: Vec<&str> = config.pinned_apps().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "E"]);
    }

    #[test]
    fn no_pinned_apps_is_empty_not_an_error() {
        let config = SiteConfig {
            users: vec![app("B", "b.png", false)],
            ..Default::default()
        };
        assert_eq!(config.pinned_apps().count(), 0);
    }

    #[test]
    fn feature_layout_alternates_by_parity() {
        let layouts: Vec<FeatureLayout> = (0..4).map(FeatureLayout::for_index).collect();
        let backgrounds: Vec<&str> = layouts.iter().map(|l| l.background.class()).collect();
        let reversed: Vec<bool> = layouts.iter().map(|l| l.reverse).collect();

        assert_eq!(backgrounds, vec!["light", "light2", "light", "light2"]);
        assert_eq!(reversed, vec![true, false, true, false]);
    }

    #[test]
    fn url_joins_onto_base() {
        let config = SiteConfig {
            base_url: "/rn/".into(),
            ..Default::default()
        };
        assert_eq!(config.url("docs/tutorial"), "/rn/docs/tutorial");
    }
}
