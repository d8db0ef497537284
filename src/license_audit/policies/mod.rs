mod primary_license;

pub use primary_license::PrimaryLicensePolicy;
