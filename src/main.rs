mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use sbom_licenses::adapters::outbound::compatibility::{
    YamlCompatibilityTableLoader, DEFAULT_TABLE_PATH,
};
use sbom_licenses::adapters::outbound::console::{IssueSummaryPrinter, StderrProgressReporter};
use sbom_licenses::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use sbom_licenses::adapters::outbound::renderers::TeraReportRenderer;
use sbom_licenses::application::dto::ReportRequest;
use sbom_licenses::application::factories::DecoderRegistry;
use sbom_licenses::application::use_cases::GenerateReportUseCase;
use sbom_licenses::ports::outbound::OutputPresenter;
use sbom_licenses::shared::error::ExitCode;
use sbom_licenses::shared::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_INPUT_PATH: &str = "./sbom.json";
const DEFAULT_OUTPUT_PATH: &str = "./licenses.md";
const STDOUT_MARKER: &str = "-";

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum OutputTarget {
    Stdout,
    File(PathBuf),
}

fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid arguments)
    let args = Args::parse_args();

    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the level
fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let (request, output) = resolve_options(&args, config.as_ref());
    tracing::debug!(?request, ?output, "options resolved");

    // Create adapters (Dependency Injection)
    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        YamlCompatibilityTableLoader::new(),
        TeraReportRenderer::new(),
        StderrProgressReporter::new(),
        DecoderRegistry::with_defaults(),
    );

    // Execute use case; nothing is written when it fails
    let response = use_case.execute(request)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match &output {
        OutputTarget::Stdout => Box::new(StdoutPresenter::new()),
        OutputTarget::File(path) => Box::new(FileSystemWriter::new(path.clone())),
    };
    presenter.present(&response.rendered)?;

    if let OutputTarget::File(path) = &output {
        eprintln!(
            "Components information has been written to {}",
            path.display()
        );
    }

    if let Some(audit) = &response.audit {
        IssueSummaryPrinter::new(std::io::stderr().is_terminal())
            .print(&audit.main_license, &audit.issues);
    }

    if response.has_license_issues() {
        Ok(ExitCode::LicenseIssuesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Loads the config given with `--config`, or auto-discovers one in the
/// working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return load_config_from_path(path).map(Some);
    }

    let cwd = std::env::current_dir()?;
    let config = discover_config(&cwd)?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            cwd.join(CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

/// Merges CLI flags, config values and defaults (in that order of precedence)
fn resolve_options(args: &Args, config: Option<&ConfigFile>) -> (ReportRequest, OutputTarget) {
    let input = args
        .input
        .clone()
        .or_else(|| config.and_then(|c| c.input.as_deref()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

    let format = args
        .format
        .or_else(|| config.and_then(ConfigFile::input_format))
        .unwrap_or_default();

    let template = args
        .template
        .clone()
        .or_else(|| config.and_then(|c| c.template.as_deref()).map(PathBuf::from));

    let validate = args.validate || config.and_then(|c| c.validate).unwrap_or(false);

    let table = args
        .compatibility_table
        .clone()
        .or_else(|| {
            config
                .and_then(|c| c.compatibility_table.as_deref())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH));

    let output = args
        .output
        .as_deref()
        .or_else(|| config.and_then(|c| c.output.as_deref()))
        .unwrap_or(DEFAULT_OUTPUT_PATH);
    let output = if output == STDOUT_MARKER {
        OutputTarget::Stdout
    } else {
        OutputTarget::File(PathBuf::from(output))
    };

    let mut request = ReportRequest::new(input, format);
    request.compatibility_table_path = table;
    request.validate = validate;
    request.template_path = template;

    (request, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use sbom_licenses::application::dto::InputFormat;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["sbom-licenses"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let (request, output) = resolve_options(&args(&[]), None);

        assert_eq!(request.input_path, PathBuf::from("./sbom.json"));
        assert_eq!(request.format, InputFormat::Json);
        assert!(request.template_path.is_none());
        assert!(!request.validate);
        assert_eq!(
            request.compatibility_table_path,
            PathBuf::from("compatibility.yaml")
        );
        assert_eq!(output, OutputTarget::File(PathBuf::from("./licenses.md")));
    }

    #[test]
    fn test_config_fills_unset_options() {
        let config = config(
            r#"
format: xml
input: bom.xml
output: "-"
template: report.tmpl
validate: true
compatibility_table: policy.yaml
"#,
        );
        let (request, output) = resolve_options(&args(&[]), Some(&config));

        assert_eq!(request.input_path, PathBuf::from("bom.xml"));
        assert_eq!(request.format, InputFormat::Xml);
        assert_eq!(request.template_path, Some(PathBuf::from("report.tmpl")));
        assert!(request.validate);
        assert_eq!(request.compatibility_table_path, PathBuf::from("policy.yaml"));
        assert_eq!(output, OutputTarget::Stdout);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = config(
            r#"
format: xml
input: bom.xml
output: from-config.md
compatibility_table: policy.yaml
"#,
        );
        let cli = args(&[
            "-i",
            "cli.json",
            "-f",
            "json",
            "-o",
            "cli.md",
            "-c",
            "cli.yaml",
        ]);
        let (request, output) = resolve_options(&cli, Some(&config));

        assert_eq!(request.input_path, PathBuf::from("cli.json"));
        assert_eq!(request.format, InputFormat::Json);
        assert_eq!(request.compatibility_table_path, PathBuf::from("cli.yaml"));
        assert_eq!(output, OutputTarget::File(PathBuf::from("cli.md")));
    }

    #[test]
    fn test_validate_flag_wins_over_config_false() {
        let config = config("validate: false\n");
        let (request, _) = resolve_options(&args(&["--validate"]), Some(&config));
        assert!(request.validate);
    }

    #[test]
    fn test_dash_output_means_stdout() {
        let (_, output) = resolve_options(&args(&["-o", "-"]), None);
        assert_eq!(output, OutputTarget::Stdout);
    }
}
