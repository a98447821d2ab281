use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;

/// Error reported by the Pix provider, normalized from its several shapes
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Single human-readable description
    #[error("{text}")]
    Description { text: String },

    /// Per-field validation failures
    #[error("{}", FieldList(.list))]
    FieldErrors { list: Vec<FieldError> },

    /// Anything else: transport failures, unexpected bodies
    #[error("{raw}")]
    Unknown { raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

struct FieldList<'a>(&'a [FieldError]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.reason)?;
        }
        Ok(())
    }
}

impl ProviderError {
    pub fn unknown(raw: impl Into<String>) -> Self {
        ProviderError::Unknown { raw: raw.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Description { .. } => "description",
            ProviderError::FieldErrors { .. } => "field_errors",
            ProviderError::Unknown { .. } => "unknown",
        }
    }

    /// Decode a non-success response body.
    ///
    /// Recognizes OAuth errors (`error_description`), Pix API violations
    /// (`violacoes`), Efí field errors (`erros`) and plain messages
    /// (`mensagem`, `detail`). Anything else is kept verbatim.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let unknown = || ProviderError::unknown(format!("HTTP {}: {}", status.as_u16(), body));

        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return unknown();
        };

        if let Some(text) = map.get("error_description").and_then(Value::as_str) {
            return ProviderError::Description {
                text: text.to_string(),
            };
        }

        if let Some(list) = map.get("violacoes").and_then(Value::as_array) {
            let list = field_errors(list, &["propriedade"], &["razao"]);
            if !list.is_empty() {
                return ProviderError::FieldErrors { list };
            }
        }

        if let Some(list) = map.get("erros").and_then(Value::as_array) {
            let list = field_errors(list, &["caminho", "chave"], &["mensagem"]);
            if !list.is_empty() {
                return ProviderError::FieldErrors { list };
            }
        }

        ["mensagem", "detail"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(|text| ProviderError::Description {
                text: text.to_string(),
            })
            .unwrap_or_else(unknown)
    }
}

fn field_errors(items: &[Value], field_keys: &[&str], reason_keys: &[&str]) -> Vec<FieldError> {
    let first_str = |item: &Value, keys: &[&str]| {
        keys.iter()
            .find_map(|key| item.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    };

    items
        .iter()
        .filter_map(|item| {
            let reason = first_str(item, reason_keys)?;
            let field = first_str(item, field_keys).unwrap_or_else(|| "-".to_string());
            Some(FieldError { field, reason })
        })
        .collect()
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        let cause = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connection failed"
        } else if e.is_decode() {
            "invalid response body"
        } else {
            "request failed"
        };
        ProviderError::unknown(format!("{}: {}", cause, e))
    }
}
