// Engine errors - Every failure that aborts a run
use crate::domain::template::TemplateKind;
use thiserror::Error;

pub const MAX_TARGETS_PER_ROW: usize = 26;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("unknown {kind} template `{name}`")]
    UnknownTemplate { kind: TemplateKind, name: String },

    #[error("cyclic {kind} inheritance: {}", .chain.join(" -> "))]
    CyclicInheritance { kind: TemplateKind, chain: Vec<String> },

    #[error("missing variable `{variable}` while trying to fill expr: {expression} (dashboard `{dashboard}`)")]
    MissingVariable {
        dashboard: String,
        expression: String,
        variable: String,
    },

    #[error("malformed expression {expression:?} in dashboard `{dashboard}`: {reason}")]
    MalformedExpression {
        dashboard: String,
        expression: String,
        reason: String,
    },

    #[error("row `{row}` declares {count} targets, at most {max} are allowed", max = MAX_TARGETS_PER_ROW)]
    TooManyTargets { row: String, count: usize },

    #[error("{kind} template `{name}` has no `{field}`")]
    MissingField {
        kind: TemplateKind,
        name: String,
        field: &'static str,
    },
}
