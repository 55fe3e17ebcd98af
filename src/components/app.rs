use crate::api::ApiConfig;
use crate::components::{view_label, AppView, Icon};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let api_config = use_signal(ApiConfig::default);

    // Provide the API target via context so views don't care which host
    // served them.
    use_context_provider(|| api_config);

    // In the browser the API lives on the page's own origin.
    #[cfg(target_arch = "wasm32")]
    {
        let mut api_config = api_config;
        use_effect(move || {
            let origin = web_sys::window().and_then(|window| window.location().origin().ok());
            if let Some(origin) = origin {
                api_config.set(ApiConfig { base_url: origin });
            }
        });
    }

    let view = use_route::<AppView>();

    rsx! {
        div { class: "app-container",
            header { class: "top-bar",
                div { class: "brand",
                    Icon {
                        name: "sparkles".to_string(),
                        class: "brand-icon".to_string(),
                    }
                    div { class: "brand-text",
                        span { class: "brand-name", "LyricForge" }
                        span { class: "brand-view", "{view_label(&view)}" }
                    }
                }
                nav { class: "top-nav",
                    Link {
                        to: AppView::GeneratorView {},
                        class: "nav-link",
                        active_class: "active",
                        "Studio"
                    }
                    Link {
                        to: AppView::ModelsView {},
                        class: "nav-link",
                        active_class: "active",
                        "Models"
                    }
                }
            }

            // Main scrollable content
            main { class: "main-content",
                div { class: "page-shell", Outlet::<AppView> {} }
            }
        }
    }
}
