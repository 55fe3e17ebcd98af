use dioxus::prelude::*;

mod api;
mod components;
#[cfg(not(target_arch = "wasm32"))]
mod diagnostics;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#10b981" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "LyricForge" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
