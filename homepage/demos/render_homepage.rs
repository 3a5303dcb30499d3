//! Homepage rendering example.
//!
//! Run with: `cargo run --example render_homepage`

use homepage_leptos::render_homepage;
use homepage_leptos::types::{AppEntry, SiteConfig};

fn main() {
    let config = SiteConfig {
        base_url: "/".into(),
        users: vec![
            AppEntry {
                name: "Facebook".into(),
                icon: "facebook.png".into(),
                info_link: "https://itunes.apple.com/app/id284882215".into(),
                pinned: true,
            },
            AppEntry {
                name: "Unlisted".into(),
                icon: "https://example.com/unlisted.png".into(),
                info_link: "https://example.com".into(),
                pinned: false,
            },
        ],
    };

    let html = render_homepage(&config);

    let output_path = "homepage.html";
    std::fs::write(output_path, &html).expect("Failed to write homepage");

    println!("Homepage written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
