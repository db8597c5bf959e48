// Row renderer - Turns a converged row into a row fragment wrapping one panel
use crate::application::expression::{escape_backslashes, substitute, ExpressionError};
use crate::application::panel_ids::PanelIdSequence;
use crate::application::scope::DashboardScope;
use crate::domain::document::{Grid, Legend, PanelFragment, RowFragment, TargetFragment, Tooltip};
use crate::domain::error::{TemplateError, MAX_TARGETS_PER_ROW};
use crate::domain::row::{Row, TargetTemplate};
use crate::domain::template::Instance;
use serde_json::{json, Value};

const DEFAULT_HEIGHT: &str = "250px";
const DEFAULT_INTERVAL_FACTOR: u32 = 2;

pub fn render_row(
    instance: &Instance<Row>,
    scope: &DashboardScope,
    panel_ids: &PanelIdSequence,
) -> Result<RowFragment, TemplateError> {
    let row = &instance.template;
    let targets = render_targets(instance, scope)?;

    let panel = PanelFragment {
        id: panel_ids.next_id(),
        alias_colors: row.alias_colors.clone().unwrap_or_default(),
        bars: row.bars.unwrap_or(false),
        datasource: nullable(&row.datasource),
        editable: row.editable.unwrap_or(true),
        error: row.error.unwrap_or(false),
        fill: row.fill.unwrap_or(1),
        left_y_axis_label: nullable(&row.left_y_axis_label),
        lines: row.lines.unwrap_or(true),
        line_width: row.line_width.unwrap_or(2),
        null_point_mode: row.null_point_mode.clone().unwrap_or_else(|| "connected".to_string()),
        percentage: row.percentage.unwrap_or(false),
        pointradius: row.pointradius.unwrap_or(5),
        points: row.points.unwrap_or(false),
        renderer: row.renderer.clone().unwrap_or_else(|| "flot".to_string()),
        right_y_axis_label: nullable(&row.right_y_axis_label),
        series_overrides: row.series_overrides.clone().unwrap_or_default(),
        span: row.span.unwrap_or(12),
        stack: row.stack.unwrap_or(false),
        stepped_line: row.stepped_line.unwrap_or(false),
        time_from: nullable(&row.time_from),
        time_shift: Value::Null,
        title: row.title.clone().unwrap_or_default(),
        panel_type: row.panel_type.clone().unwrap_or_else(|| "graph".to_string()),
        links: Vec::new(),
        tooltip: Tooltip {
            shared: row.tooltip_shared.unwrap_or(true),
            value_type: "cumulative".to_string(),
        },
        y_formats: row
            .y_formats
            .clone()
            .unwrap_or_else(|| vec!["short".to_string(), "short".to_string()]),
        legend: legend(row),
        grid: grid(row),
        targets,
    };

    tracing::debug!(
        "rendered row `{}` as panel {} with {} target(s)",
        instance.name,
        panel.id,
        panel.targets.len()
    );

    Ok(RowFragment {
        collapse: row.collapse.unwrap_or(false),
        editable: row.editable.unwrap_or(true),
        height: row.height.clone().unwrap_or_else(|| json!(DEFAULT_HEIGHT)),
        title: "Row".to_string(),
        show_title: false,
        panels: vec![panel],
    })
}

fn render_targets(
    instance: &Instance<Row>,
    scope: &DashboardScope,
) -> Result<Vec<TargetFragment>, TemplateError> {
    let row = &instance.template;
    let targets = row.targets.as_deref().unwrap_or_default();
    if targets.len() > MAX_TARGETS_PER_ROW {
        return Err(TemplateError::TooManyTargets {
            row: instance.name.clone(),
            count: targets.len(),
        });
    }

    targets
        .iter()
        .zip('A'..='Z')
        .map(|(target, ref_id)| render_target(target, ref_id, row, scope))
        .collect()
}

fn render_target(
    target: &TargetTemplate,
    ref_id: char,
    row: &Row,
    scope: &DashboardScope,
) -> Result<TargetFragment, TemplateError> {
    let expr = substitute(&target.expression, &scope.expvars).map_err(|err| match err {
        ExpressionError::MissingVariable(variable) => TemplateError::MissingVariable {
            dashboard: scope.title.clone(),
            expression: target.expression.clone(),
            variable,
        },
        ExpressionError::Malformed(reason) => TemplateError::MalformedExpression {
            dashboard: scope.title.clone(),
            expression: target.expression.clone(),
            reason,
        },
    })?;

    Ok(TargetFragment {
        expr: escape_backslashes(&expr),
        interval_factor: target
            .interval_factor
            .or(row.interval_factor)
            .unwrap_or(DEFAULT_INTERVAL_FACTOR),
        legend_format: target
            .legend_format
            .clone()
            .or_else(|| row.legend_format.clone())
            .unwrap_or_default(),
        ref_id: ref_id.to_string(),
    })
}

fn legend(row: &Row) -> Legend {
    Legend {
        align_as_table: row.legend_align_as_table.unwrap_or(false),
        avg: row.legend_avg.unwrap_or(false),
        current: row.legend_current.unwrap_or(false),
        max: row.legend_max.unwrap_or(false),
        min: row.legend_min.unwrap_or(false),
        show: row.legend_show.unwrap_or(true),
        total: row.legend_total.unwrap_or(false),
        values: row.legend_values.unwrap_or(false),
    }
}

fn grid(row: &Row) -> Grid {
    Grid {
        left_log_base: nullable(&row.grid_left_log_base),
        left_max: nullable(&row.grid_left_max),
        left_min: nullable(&row.grid_left_min),
        right_log_base: nullable(&row.grid_right_log_base),
        right_max: nullable(&row.grid_right_max),
        right_min: nullable(&row.grid_right_min),
        threshold1: nullable(&row.grid_threshold1),
        threshold1_color: nullable(&row.grid_threshold1_color),
        threshold2: nullable(&row.grid_threshold2),
        threshold2_color: nullable(&row.grid_threshold2_color),
    }
}

fn nullable(value: &Option<Value>) -> Value {
    value.clone().unwrap_or(Value::Null)
}
