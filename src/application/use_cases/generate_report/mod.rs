use crate::adapters::outbound::renderers::{DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_NAME};
use crate::application::dto::{AuditResult, ReportRequest, ReportResponse};
use crate::application::factories::DecoderRegistry;
use crate::application::read_models::LicenseReportModelBuilder;
use crate::license_audit::domain::{Bom, GroupedComponents, IssueStatus, LicenseId};
use crate::license_audit::services::{CompatibilityAuditor, ComponentGrouper};
use crate::ports::outbound::{
    CompatibilityTableLoader, DecodeError, ProgressReporter, ReportRenderer, SbomReader,
    TemplateReader,
};
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use std::path::Path;

/// GenerateReportUseCase - Core use case for the license report
///
/// Reads and decodes the SBOM, groups components by effective license,
/// optionally audits each license against the project license, and renders
/// the report. Presenting the rendered text is left to the caller so nothing
/// is written when any stage fails.
///
/// # Type Parameters
/// * `R` - SbomReader + TemplateReader implementation
/// * `L` - CompatibilityTableLoader implementation
/// * `RR` - ReportRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<R, L, RR, PR> {
    reader: R,
    table_loader: L,
    renderer: RR,
    progress_reporter: PR,
    decoders: DecoderRegistry,
}

impl<R, L, RR, PR> GenerateReportUseCase<R, L, RR, PR>
where
    R: SbomReader + TemplateReader,
    L: CompatibilityTableLoader,
    RR: ReportRenderer,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        reader: R,
        table_loader: L,
        renderer: RR,
        progress_reporter: PR,
        decoders: DecoderRegistry,
    ) -> Self {
        Self {
            reader,
            table_loader,
            renderer,
            progress_reporter,
            decoders,
        }
    }

    /// Executes the license report use case
    ///
    /// # Errors
    /// Any stage failure aborts the run: unreadable or undecodable SBOM, an
    /// SBOM without components, an undeclared project license or an unusable
    /// compatibility table (validation only), and template failures.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Read and decode the SBOM
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.input_path.display()
        ));
        let bom = self.load_bom(&request)?;
        let main_license = bom.main_license();

        let components = bom.into_components();
        if components.is_empty() {
            return Err(LicenseReportError::EmptyComponents {
                path: request.input_path.clone(),
            }
            .into());
        }
        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", components.len()));

        // Step 2: Group by effective license
        let grouped = ComponentGrouper::group(components);
        tracing::debug!(licenses = grouped.len(), "components grouped");

        // Step 3: Audit when requested
        let audit = if request.validate {
            let main_license = main_license
                .clone()
                .ok_or(LicenseReportError::ProjectLicenseUndeclared)?;
            Some(self.audit(&request.compatibility_table_path, main_license, &grouped)?)
        } else {
            None
        };

        // Step 4: Render
        let model = LicenseReportModelBuilder::build(
            &grouped,
            main_license.as_ref(),
            audit.as_ref().map(|a| &a.issues),
        );
        let rendered = match &request.template_path {
            Some(path) => {
                let template = self.reader.read_template(path)?;
                self.renderer
                    .render(&path.display().to_string(), &template, &model)?
            }
            None => self
                .renderer
                .render(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, &model)?,
        };

        Ok(ReportResponse {
            rendered,
            grouped,
            audit,
        })
    }

    fn load_bom(&self, request: &ReportRequest) -> Result<Bom> {
        let decoder = self.decoders.get(request.format.as_str())?;
        let content = self.reader.read_sbom(&request.input_path)?;

        decoder.decode(&content).map_err(|e| {
            let path = request.input_path.clone();
            match e {
                DecodeError::Empty => LicenseReportError::UnknownStructure { path }.into(),
                DecodeError::Malformed(details) => {
                    LicenseReportError::SbomParseError { path, details }.into()
                }
            }
        })
    }

    fn audit(
        &self,
        table_path: &Path,
        main_license: LicenseId,
        grouped: &GroupedComponents,
    ) -> Result<AuditResult> {
        self.progress_reporter.report(&format!(
            "📋 Loading compatibility table from: {}",
            table_path.display()
        ));
        let table = self.table_loader.load(table_path)?;

        self.progress_reporter.report(&format!(
            "🔍 Checking {} license(s) against {}",
            grouped.len(),
            main_license
        ));
        let issues =
            CompatibilityAuditor::audit_with_progress(&table, &main_license, grouped, |done, total| {
                self.progress_reporter.report_progress(done, total, None)
            });

        self.progress_reporter.report_completion(&format!(
            "✅ License check complete: {} incompatible, {} warning, {} lookup error",
            issues.count_by_status(IssueStatus::Incompatible),
            issues.count_by_status(IssueStatus::Warning),
            issues.count_by_status(IssueStatus::LookupError),
        ));

        Ok(AuditResult {
            main_license,
            issues,
        })
    }
}
