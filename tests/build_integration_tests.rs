mod utils;

use cvgen::builder::{BuildTarget, Builder};
use cvgen::config::ProjectPaths;
use cvgen::error::Error;
use test_log::test;
use utils::{scaffold_project, write, write_mo, StubTools};

fn builder_for(root: &std::path::Path) -> Builder {
    Builder::new(ProjectPaths::new(root, "output"), true)
}

#[test]
fn html_build_produces_the_expected_tree() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();
    let out = dir.path().join("output");

    let index =
        std::fs::read_to_string(out.join("html/en_US/index.html")).unwrap();
    assert!(index.contains("Jane Doe"));
    assert!(index.contains("bonjour"));
    assert!(index.contains("Lyon, France"));
    assert!(index.contains("March 2022"));

    assert!(out.join("html/en_US/404.html").exists());

    // The stylesheet lands one level up, shared across locales.
    let css = std::fs::read_to_string(out.join("html/css/style.css")).unwrap();
    assert!(css.contains("#202830"));

    // Static files are copied alongside the rendered pages.
    assert!(out.join("html/js/home.js").exists());

    // The root-level redirect page points at the first built locale.
    let redirect = std::fs::read_to_string(out.join("html/index.html")).unwrap();
    assert!(redirect.contains("/en_US/index.html"));
}

#[test]
fn locales_without_data_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();

    // fr_FR is declared in the locale list but has no data directory.
    assert!(dir.path().join("output/html/en_US").is_dir());
    assert!(!dir.path().join("output/html/fr_FR").exists());
    assert!(!dir.path().join("output/pdf/fr_FR").exists());
}

#[test]
fn tex_build_renders_latex_source_without_compiling() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());

    builder_for(dir.path()).build(&[BuildTarget::Tex]).unwrap();

    let tex =
        std::fs::read_to_string(dir.path().join("output/pdf/en_US/resume.tex"))
            .unwrap();
    assert!(tex.contains("\\section*{Jane Doe}"));
    assert!(tex.contains("\\emph{Engineer}"));
    // Template comments do not survive rendering.
    assert!(!tex.contains("personal data comes from"));
    // No compiler ran.
    assert!(!dir.path().join("output/pdf/resume.pdf").exists());
}

#[test]
fn pdf_build_names_artifacts_after_the_person() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    // Both compilers run with the pdf output root as their working
    // directory and leave their artifact there.
    let _tools = StubTools::install(&[
        ("lualatex", "printf 'PDF' > resume.pdf"),
        ("gs", "printf 'BW' > resume.bw.pdf"),
    ]);

    builder_for(dir.path()).build(&[BuildTarget::Pdf]).unwrap();
    let out = dir.path().join("output");

    assert!(out.join("pdf/en_US/resume.tex").exists());

    // Color and grayscale copies named after basics.name, spaces
    // replaced with underscores.
    let color =
        std::fs::read_to_string(out.join("pdf/en_US/Jane_Doe_resume.pdf")).unwrap();
    assert_eq!(color, "PDF");
    let grayscale =
        std::fs::read_to_string(out.join("pdf/en_US/Jane_Doe_resume.bw.pdf"))
            .unwrap();
    assert_eq!(grayscale, "BW");

    // The HTML download links get their own copies.
    assert!(out.join("html/assets/pdf/en_US/Jane_Doe_resume.pdf").exists());
    assert!(out.join("html/assets/pdf/en_US/Jane_Doe_resume.bw.pdf").exists());

    // The staging files are moved out of the pdf root, not left behind.
    assert!(!out.join("pdf/resume.pdf").exists());
    assert!(!out.join("pdf/resume.bw.pdf").exists());
}

#[test]
fn po_sources_are_compiled_before_the_build() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    write(
        &dir.path().join("locale/fr_FR/LC_MESSAGES/cvgen.po"),
        "msgid \"greeting\"\nmsgstr \"salut\"\n",
    );
    // msgfmt is invoked as `msgfmt -o {mo} {po}`.
    let _tools = StubTools::install(&[("msgfmt", "touch \"$2\"")]);

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();

    // The compiled catalog lands next to its source.
    assert!(dir.path().join("locale/fr_FR/LC_MESSAGES/cvgen.mo").exists());
}

#[test]
fn rebuilding_unchanged_inputs_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();
    let first =
        std::fs::read(dir.path().join("output/html/en_US/index.html")).unwrap();

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();
    let second =
        std::fs::read(dir.path().join("output/html/en_US/index.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn a_full_rebuild_clears_stale_output() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    write(&dir.path().join("output/html/stale.html"), "orphan");

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();
    assert!(!dir.path().join("output/html/stale.html").exists());
}

#[test]
fn missing_catalog_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    std::fs::remove_file(dir.path().join("locale/en_US/LC_MESSAGES/cvgen.mo"))
        .unwrap();

    let err = builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap_err();
    assert!(matches!(err, Error::TranslationError { code, .. } if code == "en_US"));
}

#[test]
fn missing_template_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    std::fs::remove_file(dir.path().join("template/html/404.html.j2")).unwrap();

    let err = builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap_err();
    assert!(matches!(err, Error::TemplateError(_)));
}

#[test]
fn missing_global_config_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    std::fs::remove_file(dir.path().join("data/colors.yaml")).unwrap();

    let err = builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn second_locale_with_data_builds_too_but_redirect_stays_first() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_project(dir.path());
    write(
        &dir.path().join("data/fr_FR/basics.yaml"),
        "basics:\n  name: Jeanne Dupont\n",
    );
    write_mo(
        &dir.path().join("locale/fr_FR/LC_MESSAGES/cvgen.mo"),
        &[("greeting", "salut")],
    );

    builder_for(dir.path()).build(&[BuildTarget::Html]).unwrap();

    let fr =
        std::fs::read_to_string(dir.path().join("output/html/fr_FR/index.html"))
            .unwrap();
    assert!(fr.contains("Jeanne Dupont"));
    assert!(fr.contains("salut"));

    // The one-shot redirect still targets the first locale in the list.
    let redirect =
        std::fs::read_to_string(dir.path().join("output/html/index.html")).unwrap();
    assert!(redirect.contains("/en_US/index.html"));
}
