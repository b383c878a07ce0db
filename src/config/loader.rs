//! YAML loading and last-write-wins merging

use std::path::Path;

use serde::Deserialize;

use crate::config::types::{Config, LocaleDescriptor, ProjectPaths};
use crate::constants::{COLORS_FILE, LOCALE_FILE};
use crate::error::{Error, Result};

/// Shape of `data/locale.yaml`: the locale list plus any free-form
/// companion keys.
#[derive(Debug, Deserialize)]
struct LocaleFile {
    locale: Vec<LocaleDescriptor>,
}

/// Reads a file and parses it as a YAML document.
pub fn read_yaml<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|source| Error::YamlError { path: path.display().to_string(), source })
}

fn read_yaml_object<P: AsRef<Path>>(
    path: P,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let path = path.as_ref();
    match read_yaml(path)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(Error::ConfigError(format!(
            "'{}' must be a YAML mapping at the top level",
            path.display()
        ))),
    }
}

/// Like [`read_yaml_object`], but a missing file is a config error naming
/// the file rather than a bare IO error. Used for the two global files
/// every build requires.
fn read_global_object<P: AsRef<Path>>(
    path: P,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let path = path.as_ref();
    match read_yaml_object(path) {
        Err(Error::IoError(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::ConfigError(format!(
                "missing global data file '{}'",
                path.display()
            )))
        }
        other => other,
    }
}

impl Config {
    /// Loads the two global files (locale list, color palette) and seeds
    /// one context per declared locale: the locale's own descriptor under
    /// `locale`, the whole locale document under `all_locale`, and the
    /// palette keys alongside.
    pub fn load_base(paths: &ProjectPaths) -> Result<Self> {
        let locale_path = paths.data_dir.join(LOCALE_FILE);
        let all_locale = read_global_object(&locale_path)?;
        let locale_file: LocaleFile =
            serde_json::from_value(serde_json::Value::Object(all_locale.clone()))
                .map_err(|err| {
                    Error::ConfigError(format!(
                        "'{}' has no usable 'locale' list: {err}",
                        locale_path.display()
                    ))
                })?;
        let colors = read_global_object(paths.data_dir.join(COLORS_FILE))?;

        let mut config = Config::default();
        for descriptor in &locale_file.locale {
            let mut context = serde_json::Map::new();
            context.insert(
                "locale".to_string(),
                serde_json::to_value(descriptor).map_err(|err| {
                    Error::ConfigError(format!(
                        "locale descriptor '{}' is not serializable: {err}",
                        descriptor.code
                    ))
                })?,
            );
            context.insert(
                "all_locale".to_string(),
                serde_json::Value::Object(all_locale.clone()),
            );
            for (key, value) in &colors {
                context.insert(key.clone(), value.clone());
            }
            config.insert_context(&descriptor.code, context);
        }
        config.locales = locale_file.locale;
        Ok(config)
    }

    /// Merges every file under `data/{code}/` into the locale's context,
    /// last write wins per top-level key. A missing directory means the
    /// locale is skipped, not an error. Filenames are sorted so the merge
    /// result does not depend on directory listing order.
    ///
    /// Returns whether the locale had a data directory.
    pub fn load_locale_data(&mut self, code: &str, paths: &ProjectPaths) -> Result<bool> {
        let locale_data_dir = paths.data_dir.join(code);
        if !locale_data_dir.is_dir() {
            return Ok(false);
        }

        let mut data_files = Vec::new();
        for entry in std::fs::read_dir(&locale_data_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                data_files.push(entry.path());
            }
        }
        data_files.sort();

        for data_file in data_files {
            let document = read_yaml_object(&data_file)?;
            let context = self.context_mut(code).ok_or_else(|| {
                Error::ConfigError(format!(
                    "locale '{code}' has a data directory but is not declared in the locale list"
                ))
            })?;
            for (key, value) in document {
                context.insert(key, value);
            }
        }

        // Fail here, with the locale named, rather than deep inside PDF
        // filename construction.
        self.display_name(code)?;
        Ok(true)
    }
}
