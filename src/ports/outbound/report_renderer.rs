use crate::application::read_models::LicenseReportModel;
use crate::shared::Result;

/// ReportRenderer port for turning the license report model into text
pub trait ReportRenderer {
    /// Renders `model` with the given template source
    ///
    /// # Arguments
    /// * `template_name` - Name used in error messages (usually the template path)
    /// * `template` - Template source
    /// * `model` - Render payload
    fn render(&self, template_name: &str, template: &str, model: &LicenseReportModel)
        -> Result<String>;
}
