use crate::api::{
    lyrics_model, ApiConfig, FieldError, GeneratorForm, LyricsApiClient, LYRICS_MODELS,
};
use crate::components::Icon;
use dioxus::prelude::*;

pub const PROCESSING_MESSAGE: &str = "Processing request...";

/// Lifecycle of one submission. Either outcome re-arms the form; there is no
/// terminal state beyond returning to an armed control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

impl SubmitPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitPhase::Pending)
    }

    pub fn from_outcome(outcome: Result<String, String>) -> Self {
        match outcome {
            Ok(text) => SubmitPhase::Success(text),
            Err(message) => SubmitPhase::Failure(message),
        }
    }
}

/// Everything the form needs to render for a given phase. Keeping this a
/// plain value keeps the request cycle testable without a DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorDisplay {
    pub status_text: String,
    pub error_text: Option<String>,
    pub show_loading: bool,
    pub controls_enabled: bool,
}

pub fn phase_display(phase: &SubmitPhase) -> GeneratorDisplay {
    match phase {
        SubmitPhase::Idle => GeneratorDisplay {
            status_text: String::new(),
            error_text: None,
            show_loading: false,
            controls_enabled: true,
        },
        SubmitPhase::Pending => GeneratorDisplay {
            status_text: PROCESSING_MESSAGE.to_string(),
            error_text: None,
            show_loading: true,
            controls_enabled: false,
        },
        SubmitPhase::Success(text) => GeneratorDisplay {
            status_text: text.clone(),
            error_text: None,
            show_loading: false,
            controls_enabled: true,
        },
        SubmitPhase::Failure(message) => GeneratorDisplay {
            status_text: String::new(),
            error_text: Some(message.clone()),
            show_loading: false,
            controls_enabled: true,
        },
    }
}

#[component]
pub fn GeneratorView() -> Element {
    let api_config = use_context::<Signal<ApiConfig>>();

    let mut model_id = use_signal(|| LYRICS_MODELS[0].id.to_string());
    let mut seed_text = use_signal(|| LYRICS_MODELS[0].default_seed.to_string());
    let mut word_count = use_signal(|| "96".to_string());
    let mut word_group_count = use_signal(|| "4".to_string());
    let mut phase = use_signal(|| SubmitPhase::Idle);
    let mut field_errors = use_signal(Vec::<FieldError>::new);

    let on_generate = move |_| {
        // One request at a time; the disabled button alone isn't a guarantee.
        if phase.peek().is_pending() {
            return;
        }

        let form = GeneratorForm {
            model_id: model_id(),
            seed_text: seed_text(),
            word_count: word_count(),
            word_group_count: word_group_count(),
        };

        let request = match form.into_request() {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        field_errors.set(Vec::new());
        phase.set(SubmitPhase::Pending);

        let base_url = api_config.peek().base_url.clone();
        spawn(async move {
            let client = LyricsApiClient::new(base_url);
            let outcome = client.generate_lyrics(&request).await;
            phase.set(SubmitPhase::from_outcome(outcome));
        });
    };

    let seed_placeholder = model_id()
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(lyrics_model)
        .map(|model| model.default_seed)
        .unwrap_or(LYRICS_MODELS[0].default_seed);

    let display = phase_display(&phase());
    let errors = field_errors();

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", "Lyrics Studio" }
                p { class: "page-subtitle",
                    "Seed a model with a phrase and let it finish the song."
                }
            }

            section { class: "generator-form",
                div { class: "form-row",
                    label { class: "form-label", r#for: "model_id", "Model" }
                    select {
                        id: "model_id",
                        class: "form-input",
                        value: "{model_id}",
                        disabled: !display.controls_enabled,
                        onchange: move |e| model_id.set(e.value()),
                        for model in LYRICS_MODELS {
                            option { value: "{model.id}", "{model.name}" }
                        }
                    }
                }

                div { class: "form-row",
                    label { class: "form-label", r#for: "seed_text", "Seed text" }
                    textarea {
                        id: "seed_text",
                        class: "form-input",
                        rows: "2",
                        placeholder: "{seed_placeholder}",
                        value: "{seed_text}",
                        disabled: !display.controls_enabled,
                        oninput: move |e| seed_text.set(e.value()),
                    }
                }

                div { class: "form-grid",
                    div { class: "form-row",
                        label { class: "form-label", r#for: "word_count", "Words to generate" }
                        input {
                            id: "word_count",
                            class: "form-input",
                            r#type: "number",
                            min: "1",
                            value: "{word_count}",
                            disabled: !display.controls_enabled,
                            oninput: move |e| word_count.set(e.value()),
                        }
                    }
                    div { class: "form-row",
                        label { class: "form-label", r#for: "word_group_count", "Words per line" }
                        input {
                            id: "word_group_count",
                            class: "form-input",
                            r#type: "number",
                            min: "1",
                            value: "{word_group_count}",
                            disabled: !display.controls_enabled,
                            oninput: move |e| word_group_count.set(e.value()),
                        }
                    }
                }

                if !errors.is_empty() {
                    ul { class: "field-errors",
                        for error in errors {
                            li { key: "{error.field}",
                                span { class: "field-name", "{error.field}" }
                                ": {error.message}"
                            }
                        }
                    }
                }

                button {
                    id: "generate_button",
                    class: "generate-button",
                    disabled: !display.controls_enabled,
                    onclick: on_generate,
                    if display.show_loading {
                        Icon {
                            name: "loader".to_string(),
                            class: "button-icon".to_string(),
                        }
                        "Generating..."
                    } else {
                        Icon {
                            name: "music".to_string(),
                            class: "button-icon".to_string(),
                        }
                        "Generate Lyrics"
                    }
                }
            }

            section { class: "generator-output",
                if display.show_loading {
                    div { class: "loading-indicator",
                        Icon {
                            name: "loader".to_string(),
                            class: "loading-icon".to_string(),
                        }
                        span { "Talking to the model..." }
                    }
                }

                if let Some(error) = display.error_text.clone() {
                    div { class: "alert alert-error",
                        Icon {
                            name: "alert".to_string(),
                            class: "alert-icon".to_string(),
                        }
                        span { "{error}" }
                    }
                }

                pre { id: "generated_text", class: "generated-text", "{display.status_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_display_is_armed_and_quiet() {
        let display = phase_display(&SubmitPhase::Idle);

        assert_eq!(display.status_text, "");
        assert_eq!(display.error_text, None);
        assert!(!display.show_loading);
        assert!(display.controls_enabled);
    }

    #[test]
    fn pending_display_blocks_controls_and_shows_progress() {
        let display = phase_display(&SubmitPhase::Pending);

        assert_eq!(display.status_text, PROCESSING_MESSAGE);
        assert_eq!(display.error_text, None);
        assert!(display.show_loading);
        assert!(!display.controls_enabled);
    }

    #[test]
    fn success_display_shows_body_verbatim() {
        let display = phase_display(&SubmitPhase::Success("hello world".to_string()));

        assert_eq!(display.status_text, "hello world");
        assert_eq!(display.error_text, None);
        assert!(!display.show_loading);
        assert!(display.controls_enabled);
    }

    #[test]
    fn failure_display_clears_status_and_raises_alert() {
        let display = phase_display(&SubmitPhase::Failure("model not found".to_string()));

        assert_eq!(display.status_text, "");
        assert_eq!(display.error_text.as_deref(), Some("model not found"));
        assert!(!display.show_loading);
        assert!(display.controls_enabled);
    }

    #[test]
    fn success_mapping_is_idempotent() {
        let phase = SubmitPhase::Success("hello world".to_string());

        let first = phase_display(&phase);
        let second = phase_display(&phase);

        assert_eq!(first, second);
    }

    #[test]
    fn outcomes_map_onto_phases() {
        assert_eq!(
            SubmitPhase::from_outcome(Ok("la la la".to_string())),
            SubmitPhase::Success("la la la".to_string())
        );
        assert_eq!(
            SubmitPhase::from_outcome(Err("model not found".to_string())),
            SubmitPhase::Failure("model not found".to_string())
        );
        assert!(SubmitPhase::Pending.is_pending());
        assert!(!SubmitPhase::Idle.is_pending());
    }
}
