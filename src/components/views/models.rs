use crate::api::LYRICS_MODELS;
use crate::components::Icon;
use dioxus::prelude::*;

#[component]
pub fn ModelsView() -> Element {
    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", "Models" }
                p { class: "page-subtitle",
                    "Each model was trained on a single corpus and keeps its voice."
                }
            }

            div { class: "model-grid",
                for model in LYRICS_MODELS {
                    div { key: "{model.id}", class: "model-card",
                        div { class: "model-card-header",
                            Icon {
                                name: "book".to_string(),
                                class: "model-icon".to_string(),
                            }
                            div {
                                h2 { class: "model-name", "{model.name}" }
                                p { class: "model-corpus", "{model.corpus}" }
                            }
                        }
                        div { class: "model-seed",
                            span { class: "model-seed-label", "Try seeding with" }
                            code { "{model.default_seed}" }
                        }
                    }
                }
            }
        }
    }
}
