use crate::license_audit::domain::{CompatibilityEntry, CompatibilityTable, LicenseId};
use thiserror::Error;

/// Failure of a single (main, dependency) lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no compatibility entry for dependency license '{dependency}' under main license '{main}'")]
    NotFound { main: LicenseId, dependency: LicenseId },
}

/// LicenseResolver service for looking up one license pair
///
/// Lookups are exact-string, two-level and directional: no wildcards, prefix
/// matching, symmetry or transitive reasoning.
pub struct LicenseResolver;

impl LicenseResolver {
    /// Returns the stored entry for `(main, dependency)` unmodified
    ///
    /// # Errors
    /// `ResolveError::NotFound` when `main` is not a top-level key of the table,
    /// or `dependency` is not a key of its sub-mapping
    pub fn resolve<'t>(
        table: &'t CompatibilityTable,
        main: &LicenseId,
        dependency: &LicenseId,
    ) -> Result<&'t CompatibilityEntry, ResolveError> {
        table
            .dependencies_of(main)
            .and_then(|dependencies| dependencies.get(dependency))
            .ok_or_else(|| ResolveError::NotFound {
                main: main.clone(),
                dependency: dependency.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_audit::domain::CompatibilityStatus;

    fn table() -> CompatibilityTable {
        let entries: Vec<(LicenseId, LicenseId, CompatibilityEntry)> = vec![
            ("MIT".into(), "Apache-2.0".into(), CompatibilityEntry::compatible()),
            (
                "MIT".into(),
                "GPL-3.0".into(),
                CompatibilityEntry::incompatible("copyleft conflict"),
            ),
            (
                "MIT".into(),
                "MPL-2.0".into(),
                CompatibilityEntry::warning("file-level copyleft"),
            ),
        ];
        entries.into_iter().collect()
    }

    #[test]
    fn test_resolve_returns_stored_entry() {
        let table = table();
        let entry = LicenseResolver::resolve(&table, &"MIT".into(), &"GPL-3.0".into()).unwrap();
        assert_eq!(entry.status, CompatibilityStatus::Incompatible);
        assert_eq!(entry.reason.as_deref(), Some("copyleft conflict"));
    }

    #[test]
    fn test_resolve_compatible_without_reason() {
        let table = table();
        let entry = LicenseResolver::resolve(&table, &"MIT".into(), &"Apache-2.0".into()).unwrap();
        assert_eq!(entry, &CompatibilityEntry::compatible());
    }

    #[test]
    fn test_resolve_unknown_main_license() {
        let table = table();
        let result = LicenseResolver::resolve(&table, &"Apache-2.0".into(), &"MIT".into());
        assert_eq!(
            result,
            Err(ResolveError::NotFound {
                main: "Apache-2.0".into(),
                dependency: "MIT".into(),
            })
        );
    }

    #[test]
    fn test_resolve_unknown_dependency_license() {
        let table = table();
        let result = LicenseResolver::resolve(&table, &"MIT".into(), &"ISC".into());
        assert!(matches!(result, Err(ResolveError::NotFound { .. })));
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let table = table();
        assert!(LicenseResolver::resolve(&table, &"mit".into(), &"Apache-2.0".into()).is_err());
        assert!(LicenseResolver::resolve(&table, &"MIT".into(), &"Apache-2".into()).is_err());
        assert!(LicenseResolver::resolve(&table, &"MIT".into(), &"GPL-3.0 ".into()).is_err());
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::NotFound {
            main: "MIT".into(),
            dependency: "ISC".into(),
        };
        let display = err.to_string();
        assert!(display.contains("ISC"));
        assert!(display.contains("MIT"));
    }
}
