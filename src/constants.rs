//! Constants used throughout the cvgen application

/// Directory holding the YAML resume data, relative to the project root
pub const DATA_DIR: &str = "data";

/// Locale list file inside the data directory
pub const LOCALE_FILE: &str = "locale.yaml";

/// Color palette file inside the data directory
pub const COLORS_FILE: &str = "colors.yaml";

/// Root of the template tree (one subdirectory per template family)
pub const TEMPLATE_DIR: &str = "template";

/// Static files copied verbatim into the output tree
pub const STATIC_DIR: &str = "static";

/// Shared assets copied into every output kind
pub const ASSETS_DIR: &str = "assets";

/// Directory holding gettext catalogs (`{code}/LC_MESSAGES/cvgen.{po,mo}`)
pub const LOCALE_DIR: &str = "locale";

/// gettext domain, i.e. the catalog file stem
pub const CATALOG_DOMAIN: &str = "cvgen";

/// Default output directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default strftime pattern for `format_date`
pub const DEFAULT_DATE_PATTERN: &str = "%B %Y";

/// Port the post-build static file server listens on
pub const SERVE_PORT: u16 = 8080;

/// HTML templates and their output names. The stylesheet lands one level
/// up, shared across locales.
pub const HTML_FILE_MAP: &[(&str, &str)] = &[
    ("index.html.j2", "index.html"),
    ("404.html.j2", "404.html"),
    ("style.css.j2", "../css/style.css"),
];

/// LaTeX templates and their output names
pub const TEX_FILE_MAP: &[(&str, &str)] = &[("resume.tex.j2", "resume.tex")];

/// Root-level redirect page, rendered once per build
pub const REDIRECT_TEMPLATE: &str = "redirect.html.j2";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
