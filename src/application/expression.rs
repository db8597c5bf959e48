// Expression substitution - `%(name)s` placeholders filled from a variable mapping
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExpressionError {
    #[error("missing variable `{0}`")]
    MissingVariable(String),
    #[error("{0}")]
    Malformed(String),
}

/// Substitute every `%(name)s` placeholder with `vars[name]`; `%%` yields a
/// literal percent sign. Any other use of `%` is rejected.
pub fn substitute(template: &str, vars: &BTreeMap<String, String>) -> Result<String, ExpressionError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('%') {
            result.push('%');
            rest = tail;
            continue;
        }

        let Some(named) = after.strip_prefix('(') else {
            let found = after.chars().next().map_or("end of expression".to_string(), |c| format!("`{c}`"));
            return Err(ExpressionError::Malformed(format!(
                "unsupported placeholder `%` followed by {found}, expected `%(name)s` or `%%`"
            )));
        };

        let close = named
            .find(')')
            .ok_or_else(|| ExpressionError::Malformed("unterminated `%(` placeholder".to_string()))?;
        let key = &named[..close];
        let conversion = named[close + 1..].chars().next();
        if conversion != Some('s') {
            return Err(ExpressionError::Malformed(format!(
                "placeholder `%({key})` must use the `s` conversion"
            )));
        }

        let value = vars
            .get(key)
            .ok_or_else(|| ExpressionError::MissingVariable(key.to_string()))?;
        result.push_str(value);
        rest = &named[close + 2..];
    }

    result.push_str(rest);
    Ok(result)
}

/// Double every backslash so it survives the front-end's string parsing
pub fn escape_backslashes(expression: &str) -> String {
    expression.replace('\\', "\\\\")
}
