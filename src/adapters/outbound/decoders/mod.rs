//! CycloneDX decoders, one per serialized form.

mod cyclonedx_json;
mod cyclonedx_xml;

pub use cyclonedx_json::CycloneDxJsonDecoder;
pub use cyclonedx_xml::CycloneDxXmlDecoder;

use crate::license_audit::domain::{Component, LicenseId};
use crate::license_audit::policies::PrimaryLicensePolicy;

/// One CycloneDX license choice, flattened: (license.id, license.name, expression)
type LicenseChoice = (Option<String>, Option<String>, Option<String>);

/// Builds a domain component with one license per declared choice, in document order
fn build_component(
    name: String,
    version: String,
    choices: impl IntoIterator<Item = LicenseChoice>,
) -> Component {
    let licenses: Vec<LicenseId> = choices
        .into_iter()
        .map(|(id, name, expression)| {
            PrimaryLicensePolicy::select_identifier(id, name, expression)
        })
        .collect();
    Component::new(name, version, licenses)
}
