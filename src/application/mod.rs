// Application layer - Convergence, filling and rendering of templates
pub mod convergence;
pub mod dashboard_renderer;
pub mod expression;
pub mod link_renderer;
pub mod panel_ids;
pub mod reference_filler;
pub mod row_renderer;
pub mod run_driver;
pub mod scope;
pub mod variable_renderer;
