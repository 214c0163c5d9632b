use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::identifier::generate_id;

/// The closed set of kinds a decomposed URL piece can be
///
/// Declaration order matches the order in which the parser emits components,
/// which is also the order used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPartType {
    Protocol,
    Username,
    Password,
    Hostname,
    Port,
    Pathname,
    Search,
    Hash,
}

impl UrlPartType {
    pub const ALL: [UrlPartType; 8] = [
        UrlPartType::Protocol,
        UrlPartType::Username,
        UrlPartType::Password,
        UrlPartType::Hostname,
        UrlPartType::Port,
        UrlPartType::Pathname,
        UrlPartType::Search,
        UrlPartType::Hash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlPartType::Protocol => "protocol",
            UrlPartType::Username => "username",
            UrlPartType::Password => "password",
            UrlPartType::Hostname => "hostname",
            UrlPartType::Port => "port",
            UrlPartType::Pathname => "pathname",
            UrlPartType::Search => "search",
            UrlPartType::Hash => "hash",
        }
    }

    /// Human-readable label shown next to the component
    pub fn label(&self) -> &'static str {
        match self {
            UrlPartType::Protocol => "Protocol",
            UrlPartType::Username => "Username",
            UrlPartType::Password => "Password",
            UrlPartType::Hostname => "Hostname",
            UrlPartType::Port => "Port",
            UrlPartType::Pathname => "Path",
            UrlPartType::Search => "Query Param",
            UrlPartType::Hash => "Fragment",
        }
    }

    /// Default description; search components use their key instead
    pub fn description(&self) -> &'static str {
        match self {
            UrlPartType::Protocol => "The scheme (e.g., https:)",
            UrlPartType::Username => "Basic auth username",
            UrlPartType::Password => "Basic auth password",
            UrlPartType::Hostname => "The domain name",
            UrlPartType::Port => "Network port",
            UrlPartType::Pathname => "Resource path",
            UrlPartType::Search => "Query parameter",
            UrlPartType::Hash => "Anchor/Hash",
        }
    }

    /// Whether at most one component of this type may exist in a list
    pub fn is_singular(&self) -> bool {
        !matches!(self, UrlPartType::Search)
    }
}

impl fmt::Display for UrlPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlPartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrlPartType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown URL part type: {}", s))
    }
}

/// One decomposed piece of a URL
///
/// `key` is only set for [`UrlPartType::Search`] components. Callers building
/// search components by hand must always provide it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlComponent {
    pub id: String,                     // Opaque id, only used for lookup
    #[serde(rename = "type")]
    pub part_type: UrlPartType,         // Decides position and formatting on rebuild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,            // Query parameter name (search only)
    pub value: String,                  // Raw content, e.g. "https:", "#top"
    pub is_enabled: bool,               // Whether it takes part in reconstruction
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UrlComponent {
    /// Creates an enabled component of a singular type with a fresh id
    pub fn new(part_type: UrlPartType, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            part_type,
            key: None,
            value: value.into(),
            is_enabled: true,
            label: part_type.label().to_string(),
            description: Some(part_type.description().to_string()),
        }
    }

    /// Creates an enabled query parameter component with a fresh id
    pub fn search(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: generate_id(),
            part_type: UrlPartType::Search,
            description: Some(key.clone()),
            key: Some(key),
            value: value.into(),
            is_enabled: true,
            label: UrlPartType::Search.label().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_type(&self, part_type: UrlPartType) -> bool {
        self.part_type == part_type
    }

    /// Flips the enabled flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.is_enabled = !self.is_enabled;
        self.is_enabled
    }
}
