//! Shared fixtures for integration tests.
#![allow(dead_code)] // not every test binary uses every fixture

use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

use tempfile::TempDir;

/// Writes a file, creating parent directories as needed.
pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Writes a minimal compiled gettext catalog (`.mo`) with the given
/// msgid/msgstr pairs. Little-endian, revision 0, no hash table.
pub fn write_mo(path: &Path, entries: &[(&str, &str)]) {
    let mut entries: Vec<(&str, &str)> = entries.to_vec();
    entries.sort_by_key(|(id, _)| id.to_string());

    let n = entries.len() as u32;
    let origins_offset = 28u32;
    let translations_offset = origins_offset + 8 * n;
    let data_start = translations_offset + 8 * n;

    let mut blob: Vec<u8> = Vec::new();
    let mut origin_table: Vec<(u32, u32)> = Vec::new();
    let mut translation_table: Vec<(u32, u32)> = Vec::new();
    for (id, _) in &entries {
        origin_table.push((id.len() as u32, data_start + blob.len() as u32));
        blob.extend_from_slice(id.as_bytes());
        blob.push(0);
    }
    for (_, translation) in &entries {
        translation_table.push((translation.len() as u32, data_start + blob.len() as u32));
        blob.extend_from_slice(translation.as_bytes());
        blob.push(0);
    }

    let mut out: Vec<u8> = Vec::new();
    for word in [
        0x9504_12de_u32,
        0,
        n,
        origins_offset,
        translations_offset,
        0,
        data_start,
    ] {
        out.extend_from_slice(&word.to_le_bytes());
    }
    for (len, offset) in origin_table.iter().chain(translation_table.iter()) {
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
    }
    out.extend_from_slice(&blob);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, out).unwrap();
}

static PATH_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Throwaway executables placed ahead of everything else on `PATH`.
///
/// Holds a process-wide lock so concurrent tests never see each other's
/// `PATH`; dropping the fixture restores the original value.
pub struct StubTools {
    _bin_dir: TempDir,
    saved_path: OsString,
    _lock: MutexGuard<'static, ()>,
}

impl StubTools {
    /// Installs one shell script per `(name, body)` pair.
    pub fn install(tools: &[(&str, &str)]) -> StubTools {
        let lock = PATH_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let bin_dir = TempDir::new().unwrap();
        for (name, body) in tools {
            let script = bin_dir.path().join(name);
            fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
            let mut perms = fs::metadata(&script).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&script, perms).unwrap();
        }

        let saved_path = env::var_os("PATH").unwrap_or_default();
        let mut prepended = bin_dir.path().as_os_str().to_os_string();
        prepended.push(":");
        prepended.push(&saved_path);
        env::set_var("PATH", &prepended);

        StubTools { _bin_dir: bin_dir, saved_path, _lock: lock }
    }
}

impl Drop for StubTools {
    fn drop(&mut self) {
        env::set_var("PATH", &self.saved_path);
    }
}

/// Lays out a complete resume project under `root`: locale list, palette,
/// per-locale data for `en_US` only, HTML and LaTeX templates, a static
/// file and a compiled catalog. `fr_FR` is declared but has no data
/// directory, so builds must skip it.
pub fn scaffold_project(root: &Path) {
    write(
        &root.join("data/locale.yaml"),
        "locale:\n  - code: en_US\n    name: English\n  - code: fr_FR\n    name: Français\n",
    );
    write(
        &root.join("data/colors.yaml"),
        "colors:\n  primary: '#202830'\n  accent: '#d08770'\n",
    );
    write(
        &root.join("data/en_US/basics.yaml"),
        concat!(
            "basics:\n",
            "  name: Jane Doe\n",
            "  label: Engineer\n",
            "  location:\n",
            "    city: Lyon\n",
            "    country: France\n",
        ),
    );

    write(
        &root.join("template/html/index.html.j2"),
        concat!(
            "<html><body>\n",
            "<h1>{{ basics.name }}</h1>\n",
            "<p>{{ _(\"greeting\") }}</p>\n",
            "<p>{{ location(basics.location) }}</p>\n",
            "<p>{{ format_date('2022-03-01') }}</p>\n",
            "</body></html>\n",
        ),
    );
    write(
        &root.join("template/html/404.html.j2"),
        "<h1>404 Not Found</h1><p>{{ basics.name }}</p>\n",
    );
    write(
        &root.join("template/html/style.css.j2"),
        "body { color: {{ colors.primary }}; }\n",
    );
    write(
        &root.join("template/html/redirect.html.j2"),
        "<meta http-equiv=\"refresh\" content=\"0; url=/{{ locale.code }}/index.html\">\n",
    );
    write(
        &root.join("template/tex/resume.tex.j2"),
        concat!(
            "\\documentclass{article}\n",
            "[# personal data comes from the YAML context #]\n",
            "\\begin{document}\n",
            "\\section*{[[ basics.name ]]}\n",
            "[% if basics.label %]\\emph{[[ basics.label ]]}[% endif %]\n",
            "\\end{document}\n",
        ),
    );

    write(&root.join("static/html/js/home.js"), "window.ready = true;\n");

    write_mo(
        &root.join("locale/en_US/LC_MESSAGES/cvgen.mo"),
        &[("greeting", "bonjour")],
    );
}
