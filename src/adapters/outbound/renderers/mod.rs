/// Report renderers
mod tera_renderer;

pub use tera_renderer::{TeraReportRenderer, DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_NAME};
