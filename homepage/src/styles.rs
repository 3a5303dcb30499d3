//! CSS for the homepage.
//!
//! Covers the class vocabulary emitted by [`crate::components`]:
//!
//! - `Section` with `light` / `light2` / `dark` backgrounds and `bottomSpacing`
//! - `TwoColumns`, whose `reverse` flag flips the visual order only
//! - `ActionButton`, `AppList`, `terminal`, `IntroImage`, `CodeExample`
//!
//! # Customization
//!
//! ```rust
//! use homepage_leptos::styles::HOMEPAGE_CSS;
//!
//! let my_css = ".HeaderHero .title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", HOMEPAGE_CSS, my_css);
//! ```

/// Complete CSS for the homepage.
pub const HOMEPAGE_CSS: &str = r#"
:root {
    --brand: #61dafb;
    --dark: #20232a;
    --deepdark: #282c34;
    --light: #373940;
    --text: #1a1a1a;
    --subtle: #6d6d6d;
    --divider: #ececec;
    --tintColor: #f7f7f7;
    --max-width: 900px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    color: var(--text);
    line-height: 1.6;
}

img { max-width: 100%; }

/* Sections */
.Section {
    width: 100%;
    padding-top: 50px;
    padding-bottom: 50px;
    overflow-x: hidden;
}
.Section.light { background-color: #ffffff; }
.Section.light2 { background-color: var(--tintColor); }
.Section.dark {
    background-color: var(--deepdark);
    color: #ffffff;
}
.Section.bottomSpacing { padding-bottom: 100px; }

.Section .content {
    max-width: var(--max-width);
    margin: 0 auto;
    padding: 0 20px;
}

.Heading {
    font-size: 25px;
    margin-top: 0;
    margin-bottom: 20px;
}

/* Two columns */
.TwoColumns {
    display: grid;
    grid-template-columns: 1fr 1fr;
    grid-template-areas: "first second";
    column-gap: 40px;
    max-width: var(--max-width);
    margin: 0 auto;
    padding: 0 20px;
    align-items: center;
}
.TwoColumns.reverse { grid-template-areas: "second first"; }
.TwoColumns .column.first { grid-area: first; }
.TwoColumns .column.last { grid-area: second; }
.TwoColumns .column.left { text-align: left; }
.TwoColumns .column.right { text-align: left; }

@media (max-width: 900px) {
    .TwoColumns,
    .TwoColumns.reverse {
        grid-template-columns: 1fr;
        grid-template-areas: "first" "second";
        row-gap: 30px;
    }
}

/* Hero */
.HeaderHero .socialLinks {
    display: flex;
    justify-content: flex-end;
    max-width: var(--max-width);
    margin: -10px auto 0;
    padding: 0 20px;
}
.HeaderHero .title {
    font-size: 64px;
    color: var(--brand);
    margin: 0;
}
.HeaderHero .tagline {
    font-size: 24px;
    color: #ffffff;
    margin: 10px 0 30px;
}
.HeaderHero .buttons { margin-top: 40px; }

.ActionButton {
    display: inline-block;
    padding: 8px 20px;
    margin-right: 10px;
    border: 1px solid var(--brand);
    border-radius: 3px;
    color: var(--brand);
    font-size: 18px;
    text-decoration: none;
}
.ActionButton:hover {
    background-color: var(--brand);
    color: var(--dark);
}

/* Features */
.IntroImage { position: relative; height: 420px; }
.IntroImage .iphone,
.IntroImage .android {
    position: absolute;
    max-height: 400px;
}
.IntroImage .iphone { left: 0; }
.IntroImage .android { right: 0; top: 20px; }

.CodeExample pre {
    background-color: var(--dark);
    color: #ffffff;
    padding: 20px;
    border-radius: 5px;
    overflow-x: auto;
    font-size: 14px;
}

/* Promo blocks */
.CodeReloadDemo { text-align: center; }
.DocsAndTalks iframe {
    width: 100%;
    aspect-ratio: 16 / 9;
}

/* Community */
.Community .firstP img {
    float: left;
    width: 40px;
    margin-right: 10px;
}
.AppList {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 15px;
    list-style: none;
    padding: 0;
}
.AppList .item img {
    width: 100%;
    border-radius: 20%;
}

/* Get started */
.GetStarted .steps { padding-left: 20px; }
.GetStarted .terminal {
    display: flex;
    flex-direction: column;
    background-color: #000000;
    color: #ffffff;
    padding: 15px 20px;
    border-radius: 5px;
    font-family: "SFMono-Regular", Menlo, Consolas, monospace;
}
.GetStarted .terminal code::before {
    content: "$ ";
    color: var(--subtle);
}
"#;
