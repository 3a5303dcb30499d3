//! Layout primitives shared by every homepage section

use leptos::prelude::*;

use crate::types::{Background, SectionElement};

/// Class list for a [`Section`]: `Section <name> <background>[ bottomSpacing]`.
pub fn section_class(class_name: &str, background: Background, bottom_spacing: bool) -> String {
    let mut class = format!("Section {} {}", class_name, background.class());
    if bottom_spacing {
        class.push_str(" bottomSpacing");
    }
    class
}

/// Full-width page section
#[component]
pub fn Section(
    /// Wrapping tag
    #[prop(optional)]
    element: SectionElement,
    /// Section-specific class, e.g. `Feature`
    class_name: &'static str,
    #[prop(optional)] background: Background,
    /// Adds extra padding below the content
    #[prop(optional)]
    bottom_spacing: bool,
    children: Children,
) -> impl IntoView {
    let class = section_class(class_name, background, bottom_spacing);

    match element {
        SectionElement::Header => view! { <header class=class>{children()}</header> }.into_any(),
        SectionElement::Section => view! { <section class=class>{children()}</section> }.into_any(),
    }
}

/// Two side-by-side columns.
///
/// `reverse` only swaps the `left`/`right` classes; both columns keep their
/// document order so reading order is unaffected.
#[component]
pub fn TwoColumns(
    column_one: AnyView,
    column_two: AnyView,
    #[prop(optional)] reverse: bool,
) -> impl IntoView {
    let (container, first, last) = if reverse {
        ("TwoColumns reverse", "column first right", "column last left")
    } else {
        ("TwoColumns", "column first left", "column last right")
    };

    view! {
        <div class=container>
            <div class=first>{column_one}</div>
            <div class=last>{column_two}</div>
        </div>
    }
}

/// Section heading
#[component]
pub fn Heading(#[prop(into)] text: String) -> impl IntoView {
    view! { <h2 class="Heading">{text}</h2> }
}
