use clap::Parser;
use sbom_licenses::application::dto::InputFormat;
use std::path::PathBuf;

/// Generate a third-party license report from a CycloneDX SBOM
///
/// Options left unset fall back to `sbom-licenses.config.yml` (when present)
/// and then to the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "sbom-licenses")]
#[command(version)]
#[command(
    about = "Generate a third-party license report from a CycloneDX SBOM",
    long_about = None
)]
pub struct Args {
    /// Path to the SBOM file [default: ./sbom.json]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// SBOM format: json or xml [default: json]
    #[arg(short, long)]
    pub format: Option<InputFormat>,

    /// Output file path, or `-` for stdout [default: ./licenses.md]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Report template (Tera syntax) [default: built-in Markdown template]
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Check every dependency license against the project license
    #[arg(long)]
    pub validate: bool,

    /// Compatibility table used with --validate [default: compatibility.yaml]
    #[arg(short = 'c', long = "compatibility-table", value_name = "PATH")]
    pub compatibility_table: Option<PathBuf>,

    /// Config file (auto-discovers sbom-licenses.config.yml in the working directory otherwise)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_leaves_everything_unset() {
        let args = Args::try_parse_from(["sbom-licenses"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.template.is_none());
        assert!(!args.validate);
        assert!(args.compatibility_table.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "sbom-licenses",
            "-i",
            "bom.xml",
            "-f",
            "XML",
            "-o",
            "-",
            "-t",
            "report.tmpl",
            "--validate",
            "-c",
            "policy.yaml",
            "--config",
            "custom.yml",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("bom.xml")));
        assert_eq!(args.format, Some(InputFormat::Xml));
        assert_eq!(args.output.as_deref(), Some("-"));
        assert_eq!(args.template, Some(PathBuf::from("report.tmpl")));
        assert!(args.validate);
        assert_eq!(args.compatibility_table, Some(PathBuf::from("policy.yaml")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert!(args.verbose);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["sbom-licenses", "-f", "spdx"]);
        assert!(result.is_err());
    }
}
