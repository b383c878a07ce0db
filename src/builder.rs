//! Build orchestration across locales and output kinds.
//!
//! A build walks the configured locale list in order and, for each locale
//! that has a data directory, produces every requested output kind. The
//! output root is deleted and rebuilt on each invocation; nothing is
//! incremental.

use std::fmt::Display;

use log::{debug, info};

use crate::config::{Config, ProjectPaths};
use crate::constants::{
    HTML_FILE_MAP, REDIRECT_TEMPLATE, TEX_FILE_MAP,
};
use crate::error::{Error, Result};
use crate::i18n;
use crate::ioutils::{
    copy_file, copy_tree_if_absent, create_dir_all, move_file, recreate_dir,
    write_file,
};
use crate::renderer::make_environment;
use crate::tools;

/// One concrete output kind. `Pdf` and `Tex` share templates and the
/// rendered LaTeX source; `Pdf` additionally runs the compiler toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    Html,
    Pdf,
    Tex,
}

impl BuildTarget {
    /// Template subdirectory under `template/`.
    pub fn template_family(self) -> &'static str {
        match self {
            BuildTarget::Html => "html",
            BuildTarget::Pdf | BuildTarget::Tex => "tex",
        }
    }

    /// Output subdirectory under the output root.
    pub fn output_root(self) -> &'static str {
        match self {
            BuildTarget::Html => "html",
            BuildTarget::Pdf | BuildTarget::Tex => "pdf",
        }
    }

    /// Whether the alternate `[% %]` delimiter scheme applies.
    pub fn uses_tex_syntax(self) -> bool {
        matches!(self, BuildTarget::Pdf | BuildTarget::Tex)
    }

    /// Template names and their output filenames for this kind.
    pub fn file_map(self) -> &'static [(&'static str, &'static str)] {
        match self {
            BuildTarget::Html => HTML_FILE_MAP,
            BuildTarget::Pdf | BuildTarget::Tex => TEX_FILE_MAP,
        }
    }
}

impl Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BuildTarget::Html => "html",
            BuildTarget::Pdf => "pdf",
            BuildTarget::Tex => "tex",
        })
    }
}

/// Renders every requested output kind for every configured locale.
pub struct Builder {
    paths: ProjectPaths,
    config: Config,
    quiet: bool,
    /// The root-level redirect page is rendered once per run, for the
    /// first locale that produces HTML.
    redirect_built: bool,
}

impl Builder {
    pub fn new(paths: ProjectPaths, quiet: bool) -> Self {
        Self { paths, config: Config::default(), quiet, redirect_built: false }
    }

    /// Runs a full build for the given targets.
    ///
    /// Compiles translation catalogs, loads the base config, recreates the
    /// output root, then walks the locale list. Locales without a data
    /// directory are skipped. The first unrecovered error aborts the run;
    /// already-written files stay on disk until the next invocation
    /// recreates the output root.
    pub fn build(&mut self, targets: &[BuildTarget]) -> Result<()> {
        info!("Compiling translation catalogs.");
        i18n::compile_catalogs(&self.paths.locale_dir, self.quiet)?;

        self.config = Config::load_base(&self.paths)?;
        recreate_dir(&self.paths.output_dir)?;

        let codes: Vec<String> =
            self.config.locales.iter().map(|l| l.code.clone()).collect();
        for code in codes {
            if !self.config.load_locale_data(&code, &self.paths)? {
                debug!("Locale '{code}' has no data directory, skipping.");
                continue;
            }
            for target in targets {
                info!("Building {target} resume for locale {code}.");
                self.build_target(&code, *target)?;
            }
        }
        Ok(())
    }

    fn build_target(&mut self, code: &str, target: BuildTarget) -> Result<()> {
        self.copy_static_assets(target)?;

        let catalog = i18n::load_catalog(code, &self.paths.locale_dir)?;
        let date_locale = i18n::date_locale(code)?;
        let env = make_environment(
            target,
            code,
            catalog,
            date_locale,
            &self.paths.template_dir,
        )?;

        let context = self.config.context(code).ok_or_else(|| {
            Error::ConfigError(format!("no merged context for locale '{code}'"))
        })?;
        let locale_output_dir =
            self.paths.output_dir.join(target.output_root()).join(code);
        create_dir_all(&locale_output_dir)?;

        for (template_name, output_name) in target.file_map() {
            let rendered = env.get_template(template_name)?.render(&context)?;
            write_file(&rendered, locale_output_dir.join(output_name))?;
        }

        if target == BuildTarget::Pdf {
            self.compile_pdf(code)?;
        }

        if target == BuildTarget::Html && !self.redirect_built {
            let rendered = env.get_template(REDIRECT_TEMPLATE)?.render(&context)?;
            write_file(
                &rendered,
                self.paths.output_dir.join("html").join("index.html"),
            )?;
            self.redirect_built = true;
        }
        Ok(())
    }

    /// Copies `static/{kind}` and the shared assets into the kind's output
    /// subtree. Files already present at the destination are left alone,
    /// so repeating this per locale is idempotent.
    fn copy_static_assets(&self, target: BuildTarget) -> Result<()> {
        let target_root = self.paths.output_dir.join(target.output_root());
        create_dir_all(&target_root)?;

        let static_dir = self.paths.static_dir.join(target.output_root());
        if static_dir.is_dir() {
            copy_tree_if_absent(&static_dir, &target_root)?;
        }
        if self.paths.assets_dir.is_dir() {
            copy_tree_if_absent(&self.paths.assets_dir, target_root.join("assets"))?;
        }
        Ok(())
    }

    /// Compiles the rendered LaTeX source and relocates the artifacts.
    ///
    /// `lualatex` runs with the pdf output root as its working directory,
    /// leaving `resume.pdf` there; Ghostscript derives a grayscale copy.
    /// Both land under `pdf/{code}/` and `html/assets/pdf/{code}/` (the
    /// HTML download links), named after the person.
    fn compile_pdf(&self, code: &str) -> Result<()> {
        let pdf_root = self.paths.output_dir.join("pdf");
        let html_pdf_dir =
            self.paths.output_dir.join("html").join("assets").join("pdf").join(code);
        create_dir_all(&html_pdf_dir)?;

        info!("Compiling LaTeX PDF for locale {code}.");
        tools::run_tool(
            "lualatex",
            [format!("{code}/resume.tex")],
            &pdf_root,
            self.quiet,
        )?;

        info!("Converting PDF to grayscale for locale {code}.");
        tools::run_tool(
            "gs",
            [
                "-sOutputFile=resume.bw.pdf",
                "-sDEVICE=pdfwrite",
                "-sColorConversionStrategy=Gray",
                "-dProcessColorModel=/DeviceGray",
                "-dCompatibilityLevel=1.4",
                "-dNOPAUSE",
                "-dBATCH",
                "resume.pdf",
            ],
            &pdf_root,
            self.quiet,
        )?;

        let person = self.config.display_name(code)?.replace(' ', "_");
        let color_name = format!("{person}_resume.pdf");
        let grayscale_name = format!("{person}_resume.bw.pdf");

        let color_artifact = pdf_root.join("resume.pdf");
        let grayscale_artifact = pdf_root.join("resume.bw.pdf");

        copy_file(&color_artifact, pdf_root.join(code).join(&color_name))?;
        copy_file(&grayscale_artifact, pdf_root.join(code).join(&grayscale_name))?;
        move_file(&color_artifact, html_pdf_dir.join(&color_name))?;
        move_file(&grayscale_artifact, html_pdf_dir.join(&grayscale_name))?;
        Ok(())
    }
}
