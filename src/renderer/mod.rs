//! Template environment construction.
//!
//! One environment per (build kind, locale): the HTML family keeps
//! minijinja's default delimiters, while the LaTeX family switches to
//! `[% %]` / `[[ ]]` / `[# #]` so rendered output that is itself full of
//! braces and percent signs never collides with template syntax.

pub mod helpers;

use std::path::Path;
use std::sync::Arc;

use gettext::Catalog;
use minijinja::syntax::SyntaxConfig;
use minijinja::value::Kwargs;
use minijinja::{path_loader, AutoEscape, Environment, ErrorKind, Value};

use crate::builder::BuildTarget;
use crate::constants::DEFAULT_DATE_PATTERN;
use crate::error::Result;

type RenderResult<T> = std::result::Result<T, minijinja::Error>;

/// Builds a rendering environment for one build kind and one locale.
///
/// Autoescaping stays off for both families: the output is either raw
/// LaTeX or hand-trusted HTML. Every helper is registered as a global,
/// plus `locale` (the active code) and the gettext callables backed by
/// the locale's compiled catalog.
pub fn make_environment(
    target: BuildTarget,
    locale_code: &str,
    catalog: Catalog,
    date_locale: chrono::Locale,
    template_root: &Path,
) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);

    if target.uses_tex_syntax() {
        let syntax = SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[", "]]")
            .comment_delimiters("[#", "#]")
            .build()?;
        env.set_syntax(syntax);
    }
    env.set_loader(path_loader(template_root.join(target.template_family())));

    register_helpers(&mut env, date_locale);
    install_gettext_callables(&mut env, catalog);
    env.add_global("locale", Value::from(locale_code.to_string()));
    Ok(env)
}

fn invalid_date(text: &str, err: chrono::ParseError) -> minijinja::Error {
    minijinja::Error::new(
        ErrorKind::InvalidOperation,
        format!("invalid ISO date '{text}': {err}"),
    )
}

/// Registers the helper library as template globals.
fn register_helpers(env: &mut Environment<'static>, date_locale: chrono::Locale) {
    env.add_function(
        "location",
        |parts: Value, kwargs: Kwargs| -> RenderResult<String> {
            let include_city = kwargs.get::<Option<bool>>("city")?.unwrap_or(true);
            kwargs.assert_all_used()?;
            Ok(helpers::location(&parts, include_city))
        },
    );

    env.add_function("iso_date", |text: String| -> RenderResult<Value> {
        let date =
            helpers::parse_iso_date(&text).map_err(|err| invalid_date(&text, err))?;
        Ok(Value::from(date.to_string()))
    });

    env.add_function("now_date", || Value::from(helpers::now_date().to_string()));

    env.add_function(
        "format_date",
        move |date: String, pattern: Option<String>| -> RenderResult<String> {
            let parsed =
                helpers::parse_iso_date(&date).map_err(|err| invalid_date(&date, err))?;
            let pattern =
                pattern.unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string());
            Ok(helpers::format_date(parsed, &pattern, date_locale))
        },
    );

    env.add_function(
        "relative_delta_date",
        |end: String, start: String| -> RenderResult<Value> {
            let end_date =
                helpers::parse_iso_date(&end).map_err(|err| invalid_date(&end, err))?;
            let start_date = helpers::parse_iso_date(&start)
                .map_err(|err| invalid_date(&start, err))?;
            Ok(Value::from_serialize(helpers::relative_delta_date(
                end_date, start_date,
            )))
        },
    );

    env.add_function("to_html", |text: String| helpers::to_html(&text));

    env.add_function(
        "subs",
        |key: String, mapping: Value| -> RenderResult<Value> {
            let value = mapping.get_attr(&key)?;
            if value.is_undefined() {
                Err(minijinja::Error::new(
                    ErrorKind::UndefinedError,
                    format!("key '{key}' is not present in the given mapping"),
                ))
            } else {
                Ok(value)
            }
        },
    );
}

/// Wires `_`, `gettext` and `ngettext` to the locale's compiled catalog so
/// translatable strings in templates resolve at render time.
fn install_gettext_callables(env: &mut Environment<'static>, catalog: Catalog) {
    let catalog = Arc::new(catalog);

    let lookup = Arc::clone(&catalog);
    env.add_function("gettext", move |message: String| {
        lookup.gettext(&message).to_string()
    });

    let lookup = Arc::clone(&catalog);
    env.add_function("_", move |message: String| lookup.gettext(&message).to_string());

    env.add_function(
        "ngettext",
        move |singular: String, plural: String, n: u64| {
            catalog.ngettext(&singular, &plural, n).to_string()
        },
    );
}
