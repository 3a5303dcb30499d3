//! Feature rows: alternating heading/text and illustration columns

use leptos::prelude::*;

use super::{Heading, Section, TwoColumns};
use crate::markdown::MarkdownBlock;
use crate::types::{FeatureImage, FeatureLayout, FeatureRecord};

const CODE_EXAMPLE: &str = r#"
```javascript
import React, {Component} from 'react';
import {Text, View} from 'react-native';
import {Header} from './Header';

export default () =>
  <View>
    <Header title="Welcome to React Native"/>
    <Text style={header}>Step One</Text>
    <Text>
      Edit App.js to change this screen and turn it
      into your app.
    </Text>
    <Text style={header}>See Your Changes</Text>
    <Text>
      Press Cmd + R inside the simulator to reload
      your app’s code.
    </Text>
    …
   </View>
```
"#;

/// iPhone and Android screenshots side by side
#[component]
pub fn IntroImage(#[prop(into)] base_url: String) -> impl IntoView {
    view! {
        <div class="IntroImage">
            <img class="iphone" src=format!("{}img/homepage/iphone-demo.png", base_url) />
            <img class="android" src=format!("{}img/homepage/android-demo.png", base_url) />
        </div>
    }
}

/// Highlighted sample component
#[component]
pub fn CodeExample() -> impl IntoView {
    view! {
        <div class="CodeExample">
            <MarkdownBlock text=CODE_EXAMPLE />
        </div>
    }
}

/// The four homepage features, in display order.
pub fn feature_records(base_url: &str) -> Vec<FeatureRecord> {
    let intro_base = base_url.to_string();

    vec![
        FeatureRecord {
            title: "Create native apps using React and JavaScript",
            text: "React Native lowers the barrier for creating native-quality apps using the world’s most popular programming language and one of the most popular user-interface libraries for it: [React](https://reactjs.org).\n\nReact offers a uni-directional declarative programming model that drastically reduces the complexity in building user interfaces.",
            image: FeatureImage::renderer(move || {
                view! { <IntroImage base_url=intro_base.clone() /> }.into_any()
            }),
        },
        FeatureRecord {
            title: "View, Text, Image",
            text: "React Native provides platform-agnostic APIs, sharing ideas with how native developers have been writing apps for the last decade.\n\nYou can write components which wrap your existing native code, leaving you to interact with all APIs via React’s declarative UI paradigm and JavaScript.\n\nThis enables native app development for whole new teams of developers, and can let existing native teams work much faster.",
            image: FeatureImage::renderer(|| view! { <CodeExample /> }.into_any()),
        },
        FeatureRecord {
            title: "Native Experience",
            text: "React components in React Native map directly to the platform’s native UI building blocks.\n\nYou can use React Native to augment your existing native code in Kotlin, Swift, Java, and Objective-C.\n\nNo web-views. Unless you want to show web pages.",
            image: FeatureImage::Url(format!("{}img/homepage/dissection.svg", base_url)),
        },
        FeatureRecord {
            title: "Seamless cross-platform",
            text: "Ensure all your apps feel native on all platforms by easily creating platform-specific versions of a Component.\n\nThis technique is used to allow a single codebase to share a large amount of code across all platforms.",
            image: FeatureImage::Url(format!("{}img/homepage/cross-platform.svg", base_url)),
        },
    ]
}

/// A single feature row
#[component]
pub fn Feature(feature: FeatureRecord, layout: FeatureLayout) -> impl IntoView {
    let image = match feature.image {
        FeatureImage::Url(src) => view! { <img src=src /> }.into_any(),
        FeatureImage::Renderer(render) => render(),
    };
    let copy = view! {
        <Heading text=feature.title />
        <MarkdownBlock text=feature.text />
    }
    .into_any();

    view! {
        <Section class_name="Feature" background=layout.background>
            <TwoColumns reverse=layout.reverse column_one=copy column_two=image />
        </Section>
    }
}

/// All features, alternating shade and column order by position
#[component]
pub fn FeatureList(features: Vec<FeatureRecord>) -> impl IntoView {
    features
        .into_iter()
        .enumerate()
        .map(|(idx, feature)| {
            let layout = FeatureLayout::for_index(idx);
            view! { <Feature feature=feature layout=layout /> }
        })
        .collect::<Vec<_>>()
}
