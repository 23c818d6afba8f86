//! `${VAR}` expansion for configuration strings.
//!
//! `${VAR}` must be set; `${VAR:-default}` falls back to `default`.
//! Bare `$VAR` is left alone so URLs containing `$` survive untouched.

use crate::ConfigError;

/// Unset variable reported by the lookup closure.
struct UnsetVar(String);

fn lookup(var: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(var)
        .map(Some)
        .map_err(|_| UnsetVar(var.to_owned()))
}

/// Expand `${...}` references in `value`, naming `field` in errors.
///
/// Each braced span is expanded on its own; text between spans is copied
/// verbatim.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_braced(&rest[start..end], field)?);
        rest = &rest[end..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-default}` span.
fn expand_braced(span: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(span, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.cause.0),
        })
}
