use serde::Deserialize;

/// Attribute on `<body>` the host page can use to override [`RouterConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-fish-view-config";

/// Which markup the click router looks for.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Class that tags thumbnail images.
    pub marker_class: String,
    /// Tag name of the row enclosing a thumbnail.
    pub row_tag: String,
    /// Row attribute carrying the fish id.
    pub row_id_attribute: String,
    pub image_src_attribute: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            marker_class: "img-thumbnail".to_string(),
            row_tag: "tr".to_string(),
            row_id_attribute: "data-fish-id".to_string(),
            image_src_attribute: "src".to_string(),
        }
    }
}

impl RouterConfig {
    /// Parses an override blob. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Like [`RouterConfig::from_json`], but an absent or broken blob yields
    /// the defaults. The parse error, if any, is handed back for logging.
    pub fn from_optional_json(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match raw.map(str::trim).filter(|r| !r.is_empty()) {
            None => (Self::default(), None),
            Some(r) => match Self::from_json(r) {
                Ok(cfg) => (cfg, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}
