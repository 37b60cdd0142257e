//! Generation options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::link::LinkTemplate;
use crate::model::Visibility;

/// Granularity of the generated pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// One page per class holding every member.
    #[default]
    Class,
    /// A summary page per class plus one page per method, property and
    /// constant.
    Component,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "component" => Ok(Self::Component),
            other => Err(format!("unknown level '{other}' (expected class or component)")),
        }
    }
}

/// Options controlling link targets, the index page and member filters.
///
/// Loaded from JSON with camelCase keys; every key is optional.
///
/// ```json
/// { "linkTemplate": "%c.md", "level": "component", "hidePrivate": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Link target template; `%c` is replaced by the flattened name.
    pub link_template: String,
    /// File name of the index page.
    pub index_file: String,
    /// Page granularity.
    pub level: Level,
    /// Sort index levels and member lists alphabetically.
    pub sort_index: bool,
    /// Sort `@see` references alphabetically.
    pub sort_see: bool,
    pub hide_public: bool,
    pub hide_protected: bool,
    pub hide_private: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            link_template: LinkTemplate::default().as_str().to_string(),
            index_file: "ApiIndex.md".to_string(),
            level: Level::Class,
            sort_index: false,
            sort_see: false,
            hide_public: false,
            hide_protected: false,
            hide_private: false,
        }
    }
}

impl Options {
    /// Read options from a JSON file.
    pub fn read_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Whether members of the given visibility are rendered.
    pub fn is_visible(&self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Public => !self.hide_public,
            Visibility::Protected => !self.hide_protected,
            Visibility::Private => !self.hide_private,
        }
    }

    pub fn link_template(&self) -> LinkTemplate {
        LinkTemplate::new(self.link_template.clone())
    }
}
