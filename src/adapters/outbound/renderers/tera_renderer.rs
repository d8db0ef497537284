use crate::application::read_models::LicenseReportModel;
use crate::ports::outbound::ReportRenderer;
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use tera::{Context, Tera};

/// Name under which the built-in template is registered
pub const DEFAULT_TEMPLATE_NAME: &str = "licenses.md";

/// Built-in Markdown report, used when no template file is given
pub const DEFAULT_TEMPLATE: &str = r#"# Third-Party Licenses
{% if main_license %}
Project license: **{{ main_license }}**
{% endif %}
{{ component_count }} component(s) under {{ sorted_keys | length }} license(s).
{% for group in groups %}
## {{ group.license }}

| Component | Version |
|-----------|---------|
{% for component in group.components -%}
| {{ component.name }} | {{ component.version }} |
{% endfor -%}
{% endfor %}
{%- if validated %}
## License Compatibility
{% if issues | length == 0 %}
All dependency licenses are compatible with {{ main_license }}.
{% else %}
| License | Status | Reason |
|---------|--------|--------|
{% for issue in issues -%}
| {{ issue.license }} | {{ issue.status }} | {{ issue.reason }} |
{% endfor -%}
{% endif -%}
{% endif %}"#;

/// TeraReportRenderer adapter rendering reports with the Tera engine
///
/// Each call compiles the template on its own `Tera` instance; templates are
/// rendered once per run, so nothing is cached.
pub struct TeraReportRenderer;

impl TeraReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Flattens a Tera error and its sources into one line
    fn describe(error: &tera::Error) -> String {
        let mut details = error.to_string();
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            details.push_str(": ");
            details.push_str(&cause.to_string());
            source = cause.source();
        }
        details
    }
}

impl Default for TeraReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TeraReportRenderer {
    fn render(
        &self,
        template_name: &str,
        template: &str,
        model: &LicenseReportModel,
    ) -> Result<String> {
        let template_error = |e: &tera::Error| LicenseReportError::TemplateError {
            template: template_name.to_string(),
            details: Self::describe(e),
        };

        let mut tera = Tera::default();
        // Reports are plain text whatever the template file extension
        tera.autoescape_on(vec![]);
        tera.add_raw_template(template_name, template)
            .map_err(|e| template_error(&e))?;

        let context = Context::from_serialize(model).map_err(|e| template_error(&e))?;

        let rendered = tera
            .render(template_name, &context)
            .map_err(|e| template_error(&e))?;

        tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
        Ok(rendered)
    }
}
