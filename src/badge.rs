use crate::error::GistStarsError;
use serde::Serialize;

/// Static label/color/logo merged into every badge a service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefaults {
    pub label: &'static str,
    pub color: &'static str,
    pub named_logo: &'static str,
}

/// Per-request output of a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBadge {
    pub message: String,
    pub link: [String; 2],
}

/// Badge payload in the shields endpoint schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: String,
    pub named_logo: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Badge {
    pub fn new(defaults: &BadgeDefaults, rendered: RenderedBadge) -> Self {
        Badge {
            schema_version: 1,
            label: defaults.label.to_string(),
            message: rendered.message,
            color: defaults.color.to_string(),
            named_logo: defaults.named_logo.to_string(),
            link: rendered.link.to_vec(),
            style: None,
            is_error: false,
        }
    }

    /// Error badge: keeps the label and logo, shows the pretty message.
    pub fn from_error(defaults: &BadgeDefaults, error: &GistStarsError) -> Self {
        let color = match error {
            GistStarsError::NotFound(_) => "red",
            _ => "lightgrey",
        };

        Badge {
            schema_version: 1,
            label: defaults.label.to_string(),
            message: error.pretty_message().to_string(),
            color: color.to_string(),
            named_logo: defaults.named_logo.to_string(),
            link: Vec::new(),
            style: None,
            is_error: true,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}
