//! Leptos UI components for the homepage.
//!
//! Each component is a Leptos `#[component]` function from props to a view.
//! They compose top to bottom into the page:
//!
//! # Component Hierarchy
//!
//! ```text
//! HomepageDocument
//! └── HomePage
//!     ├── HeaderHero
//!     │   ├── TwitterButton
//!     │   └── TwoColumns (reversed): Logo | title, tagline, HomeCallToAction
//!     └── main
//!         ├── FeatureList
//!         │   └── Feature × 4 (Section + TwoColumns, alternating)
//!         ├── CodeReloadDemo
//!         ├── DocsAndTalks
//!         ├── Community
//!         │   └── AppList (pinned apps only)
//!         └── GetStarted
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_homepage`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use homepage_leptos::components::{Section, Heading, TwitterButton};
//!
//! view! {
//!     <Section class_name="News">
//!         <Heading text="Latest" />
//!         <TwitterButton show_count=true />
//!     </Section>
//! }
//! ```

mod community;
mod document;
mod features;
mod get_started;
mod hero;
mod layout;
mod promo;
mod social;

pub use community::{AppList, Community};
pub use document::{HomePage, HomepageDocument};
pub use features::{feature_records, CodeExample, Feature, FeatureList, IntroImage};
pub use get_started::GetStarted;
pub use hero::{ActionButton, HeaderHero, HomeCallToAction, Logo};
pub use layout::{section_class, Heading, Section, TwoColumns};
pub use promo::{CodeReloadDemo, DocsAndTalks};
pub use social::TwitterButton;
