use serde::{Deserialize, Serialize};

/// One lyrics-generation request as the server expects it on `/lyrics-api`.
///
/// Built fresh for every submission and dropped once the call resolves; nothing
/// outside the submit handler holds on to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsRequest {
    pub model_id: u32,
    pub seed_text: String,
    pub word_count: u32,
    pub word_group_count: u32,
}

/// Raw form values exactly as read from the inputs, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorForm {
    pub model_id: String,
    pub seed_text: String,
    pub word_count: String,
    pub word_group_count: String,
}

/// A single failed validation rule, tied to the field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl GeneratorForm {
    /// Validate the raw values and build the request, or report every field
    /// that failed. An empty seed text is accepted and sent as-is; only the
    /// numeric fields are constrained.
    pub fn into_request(&self) -> Result<LyricsRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let model_id = match parse_count_field("model_id", &self.model_id, 1) {
            Ok(id) => {
                if lyrics_model(id).is_none() {
                    errors.push(FieldError::new("model_id", format!("unknown model id {id}")));
                    None
                } else {
                    Some(id)
                }
            }
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let word_count = collect_count_field("word_count", &self.word_count, 1, &mut errors);
        let word_group_count =
            collect_count_field("word_group_count", &self.word_group_count, 1, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        // All three are Some once errors is empty.
        Ok(LyricsRequest {
            model_id: model_id.unwrap_or_default(),
            seed_text: self.seed_text.clone(),
            word_count: word_count.unwrap_or_default(),
            word_group_count: word_group_count.unwrap_or_default(),
        })
    }
}

fn parse_count_field(field: &'static str, raw: &str, minimum: u32) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "value is required"));
    }

    let value = trimmed
        .parse::<u32>()
        .map_err(|_| FieldError::new(field, format!("'{trimmed}' is not a whole number")))?;

    if value < minimum {
        return Err(FieldError::new(field, format!("must be at least {minimum}")));
    }

    Ok(value)
}

fn collect_count_field(
    field: &'static str,
    raw: &str,
    minimum: u32,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    match parse_count_field(field, raw, minimum) {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// A generation model the server can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LyricsModelInfo {
    pub id: u32,
    pub name: &'static str,
    pub corpus: &'static str,
    pub default_seed: &'static str,
}

/// The models the backend serves, with the seed texts their corpora respond
/// well to.
pub const LYRICS_MODELS: &[LyricsModelInfo] = &[
    LyricsModelInfo {
        id: 1,
        name: "Irish Literature",
        corpus: "Traditional Irish song lyrics",
        default_seed: "i wish to see green fields once more",
    },
    LyricsModelInfo {
        id: 2,
        name: "Shakespeare Sonnets",
        corpus: "The complete Shakespeare sonnets",
        default_seed: "evening fountains lit loss",
    },
    LyricsModelInfo {
        id: 3,
        name: "Poe Poems",
        corpus: "Edgar Allan Poe's collected poems",
        default_seed: "a dreary midnight bird",
    },
];

pub fn lyrics_model(id: u32) -> Option<&'static LyricsModelInfo> {
    LYRICS_MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_form() -> GeneratorForm {
        GeneratorForm {
            model_id: "1".to_string(),
            seed_text: "i wish to see green fields once more".to_string(),
            word_count: "96".to_string(),
            word_group_count: "4".to_string(),
        }
    }

    #[test]
    fn valid_form_maps_to_parsed_integers() {
        let request = valid_form().into_request().expect("form should validate");

        assert_eq!(request.model_id, 1);
        assert_eq!(request.seed_text, "i wish to see green fields once more");
        assert_eq!(request.word_count, 96);
        assert_eq!(request.word_group_count, 4);
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = valid_form().into_request().expect("form should validate");
        let body = serde_json::to_value(&request).expect("request should serialize");

        assert_eq!(
            body,
            json!({
                "model_id": 1,
                "seed_text": "i wish to see green fields once more",
                "word_count": 96,
                "word_group_count": 4,
            })
        );
    }

    #[test]
    fn empty_seed_text_is_still_sent() {
        let mut form = valid_form();
        form.seed_text = String::new();

        let request = form.into_request().expect("empty seed should be allowed");
        assert_eq!(request.seed_text, "");
    }

    #[test]
    fn non_numeric_fields_are_rejected_before_send() {
        let mut form = valid_form();
        form.word_count = "not-a-number".to_string();

        let errors = form.into_request().expect_err("form should fail validation");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "word_count");
    }

    #[test]
    fn all_invalid_fields_are_reported_together() {
        let form = GeneratorForm {
            model_id: "".to_string(),
            seed_text: "some seed".to_string(),
            word_count: "ninety".to_string(),
            word_group_count: "0".to_string(),
        };

        let errors = form.into_request().expect_err("form should fail validation");
        let fields: Vec<&str> = errors.iter().map(|error| error.field).collect();
        assert_eq!(fields, vec!["model_id", "word_count", "word_group_count"]);
    }

    #[test]
    fn unknown_model_id_is_rejected() {
        let mut form = valid_form();
        form.model_id = "42".to_string();

        let errors = form.into_request().expect_err("form should fail validation");
        assert_eq!(errors[0].field, "model_id");
    }

    #[test]
    fn catalog_lookup_finds_every_listed_model() {
        for model in LYRICS_MODELS {
            assert_eq!(lyrics_model(model.id), Some(model));
        }
        assert_eq!(lyrics_model(0), None);
    }
}
