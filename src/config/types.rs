//! Locale descriptors and the merged per-locale render contexts

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ASSETS_DIR, DATA_DIR, LOCALE_DIR, STATIC_DIR, TEMPLATE_DIR,
};
use crate::error::{Error, Result};

/// One supported language/region, as declared in `data/locale.yaml`.
/// Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LocaleDescriptor {
    /// Locale code such as `en_US`, selecting both content translation and
    /// date formatting.
    pub code: String,
    /// Free-form display fields (language name, flag, ...) passed through
    /// to templates untouched.
    #[serde(flatten)]
    pub display: serde_json::Map<String, serde_json::Value>,
}

/// Resolved locations of every input and output directory. Replaces the
/// original generator's script-directory global with an explicit struct
/// handed to the orchestrator.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub locale_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(project_dir: P, output_dir: Q) -> Self {
        let root = project_dir.as_ref().to_path_buf();
        Self {
            data_dir: root.join(DATA_DIR),
            template_dir: root.join(TEMPLATE_DIR),
            static_dir: root.join(STATIC_DIR),
            assets_dir: root.join(ASSETS_DIR),
            locale_dir: root.join(LOCALE_DIR),
            output_dir: root.join(output_dir),
            root,
        }
    }
}

/// Merged resume content: one render context per locale code, each a flat
/// mapping of top-level YAML keys. Mutable while data files are merged in,
/// read-only during rendering.
#[derive(Debug, Default)]
pub struct Config {
    /// Locale list in declaration order.
    pub locales: Vec<LocaleDescriptor>,
    contexts: IndexMap<String, serde_json::Map<String, serde_json::Value>>,
}

impl Config {
    pub(crate) fn insert_context(
        &mut self,
        code: &str,
        context: serde_json::Map<String, serde_json::Value>,
    ) {
        self.contexts.insert(code.to_string(), context);
    }

    pub(crate) fn context_mut(
        &mut self,
        code: &str,
    ) -> Option<&mut serde_json::Map<String, serde_json::Value>> {
        self.contexts.get_mut(code)
    }

    /// The merged render context for a locale, as a JSON object value.
    pub fn context(&self, code: &str) -> Option<serde_json::Value> {
        self.contexts.get(code).cloned().map(serde_json::Value::Object)
    }

    /// The person's display name (`basics.name`), validated eagerly when
    /// locale data is merged. Used to build PDF output filenames.
    pub fn display_name(&self, code: &str) -> Result<&str> {
        self.contexts
            .get(code)
            .and_then(|context| context.get("basics"))
            .and_then(|basics| basics.get("name"))
            .and_then(|name| name.as_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "locale '{code}' has no 'basics.name' field"
                ))
            })
    }
}
