/// Serialized SBOM form selected on the command line
///
/// The name returned by [`as_str`](InputFormat::as_str) is the key under
/// which the matching decoder is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// CycloneDX JSON (default)
    #[default]
    Json,
    /// CycloneDX XML
    Xml,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::Xml => "xml",
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "xml" => Ok(InputFormat::Xml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'xml'",
                s
            )),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_input_format_from_str() {
        assert_eq!(InputFormat::from_str("json").unwrap(), InputFormat::Json);
        assert_eq!(InputFormat::from_str("xml").unwrap(), InputFormat::Xml);
    }

    #[test]
    fn test_input_format_from_str_case_insensitive() {
        assert_eq!(InputFormat::from_str("JSON").unwrap(), InputFormat::Json);
        assert_eq!(InputFormat::from_str("Xml").unwrap(), InputFormat::Xml);
    }

    #[test]
    fn test_input_format_from_str_invalid() {
        let error = InputFormat::from_str("yaml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
        assert!(error.contains("json"));
        assert!(error.contains("xml"));
    }

    #[test]
    fn test_input_format_default_and_display() {
        assert_eq!(InputFormat::default(), InputFormat::Json);
        assert_eq!(InputFormat::Xml.to_string(), "xml");
    }
}
