use crate::builder::BuildTarget;
use crate::constants::{verbosity, DEFAULT_OUTPUT_DIR};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

/// Which outputs a build invocation produces.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum BuildKind {
    /// PDF and HTML.
    Both,
    /// The HTML website only.
    Html,
    /// The compiled PDF (implies rendering the LaTeX source).
    Pdf,
    /// The LaTeX source only, without invoking the compiler.
    Tex,
}

impl BuildKind {
    /// Concrete targets in build order. The original generator built the
    /// PDF before the HTML pages so download links point at fresh files.
    pub fn targets(self) -> Vec<BuildTarget> {
        match self {
            BuildKind::Both => vec![BuildTarget::Pdf, BuildTarget::Html],
            BuildKind::Html => vec![BuildTarget::Html],
            BuildKind::Pdf => vec![BuildTarget::Pdf],
            BuildKind::Tex => vec![BuildTarget::Tex],
        }
    }

    /// Whether the build leaves an HTML tree worth serving.
    pub fn produces_html(self) -> bool {
        matches!(self, BuildKind::Both | BuildKind::Html)
    }
}

impl Display for BuildKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BuildKind::Both => "both",
            BuildKind::Html => "html",
            BuildKind::Pdf => "pdf",
            BuildKind::Tex => "tex",
        };
        write!(f, "{s}")
    }
}

/// CLI arguments for cvgen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Kind of resume to build.
    #[arg(short, long, value_enum, default_value_t = BuildKind::Both)]
    pub build: BuildKind,

    /// Output directory for built files, relative to the project root.
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Project root holding `data/`, `template/`, `static/` and `locale/`.
    #[arg(long, value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress LaTeX, Ghostscript and msgfmt output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Serve the built HTML tree over local HTTP once the build is done.
    /// Incompatible with builds that produce no HTML.
    #[arg(short, long)]
    pub serve: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
