//! Translation catalogs and date-formatting locales.
//!
//! Catalogs are standard gettext `.mo` files laid out as
//! `locale/{code}/LC_MESSAGES/cvgen.mo`. The companion `.po` sources are
//! compiled with `msgfmt` before any locale is bound.

use std::path::Path;

use gettext::Catalog;
use log::debug;
use walkdir::WalkDir;

use crate::constants::CATALOG_DOMAIN;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::tools;

/// Loads the compiled message catalog for a locale code.
///
/// A missing catalog is a [`Error::TranslationError`]: the compile step
/// must have produced the `.mo` before this runs.
pub fn load_catalog(code: &str, locale_dir: &Path) -> Result<Catalog> {
    let catalog_path =
        locale_dir.join(code).join("LC_MESSAGES").join(format!("{CATALOG_DOMAIN}.mo"));
    if !catalog_path.is_file() {
        return Err(Error::TranslationError {
            code: code.to_string(),
            search_dir: locale_dir.display().to_string(),
        });
    }
    let file = std::fs::File::open(&catalog_path)?;
    Catalog::parse(file).map_err(|source| Error::CatalogError {
        path: catalog_path.display().to_string(),
        source,
    })
}

/// Maps a locale code to the chrono locale driving month and day names.
///
/// An explicit parameter threaded into `format_date` replaces the
/// original's process-wide `setlocale`; codes chrono does not know are a
/// [`Error::LocaleError`].
pub fn date_locale(code: &str) -> Result<chrono::Locale> {
    chrono::Locale::try_from(code)
        .map_err(|_| Error::LocaleError { code: code.to_string() })
}

/// Compiles every `.po` source under the locale directory to its `.mo`
/// companion by invoking `msgfmt`. A nonzero exit aborts the build.
pub fn compile_catalogs(locale_dir: &Path, quiet: bool) -> Result<()> {
    if !locale_dir.is_dir() {
        debug!("No locale directory at '{}', nothing to compile.", locale_dir.display());
        return Ok(());
    }

    for entry in WalkDir::new(locale_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("po") {
            continue;
        }
        let compiled = path.with_extension("mo");
        debug!("Compiling catalog '{}'.", path.display());
        tools::run_tool(
            "msgfmt",
            &["-o", compiled.to_str_checked()?, path.to_str_checked()?],
            locale_dir,
            quiet,
        )?;
    }
    Ok(())
}
