/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used throughout the generator.
pub mod constants;

/// Resume data loading and per-locale merging.
pub mod config;

/// Template environments and the helper library exposed to templates.
pub mod renderer;

/// Translation catalogs and date-formatting locales.
pub mod i18n;

/// External tool invocation (msgfmt, lualatex, Ghostscript, dev server).
pub mod tools;

/// Build orchestration across locales and output kinds.
pub mod builder;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Extension traits.
pub mod ext;
