use serde::{Deserialize, Serialize};

/// Configuration documents editable through the management server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    /// Cloud provider definitions.
    #[default]
    Providers,
    /// Login and credential definitions.
    Logins,
    /// Instance template definitions.
    Instances,
}

impl ConfigType {
    /// Stable wire value, used both as the HTTP form/query field value and as
    /// the serialized representation in the config file.
    pub fn form_value(&self) -> &'static str {
        match self {
            ConfigType::Providers => "providers",
            ConfigType::Logins => "logins",
            ConfigType::Instances => "instances",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_are_stable() {
        assert_eq!(ConfigType::Providers.form_value(), "providers");
        assert_eq!(ConfigType::Logins.form_value(), "logins");
        assert_eq!(ConfigType::Instances.form_value(), "instances");
    }

    #[test]
    fn default_is_providers() {
        assert_eq!(ConfigType::default(), ConfigType::Providers);
    }
}
