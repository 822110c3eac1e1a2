//! SMS provider entity

use serde::{Deserialize, Serialize};

/// Template variable that receives the code when none is configured
pub const DEFAULT_CODE_VAR: &str = "code";

/// Normalized settings of one SMS provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name as known to the SMS transport
    pub name: String,

    /// Template to send with; `None` uses the provider's default template
    pub template_id: Option<String>,

    /// Template variable name the code is bound to
    pub code_var: String,
}

impl ProviderConfig {
    /// Provider with its default template and variable
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_id: None,
            code_var: DEFAULT_CODE_VAR.to_string(),
        }
    }

    /// Build from optional raw settings, treating empty strings as unset
    pub fn from_parts(
        name: impl Into<String>,
        template_id: Option<&str>,
        code_var: Option<&str>,
    ) -> Self {
        let template_id = template_id
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let code_var = code_var
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_CODE_VAR)
            .to_string();

        Self {
            name: name.into(),
            template_id,
            code_var,
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }
}
