//! License capability consulted before generating a paid blueprint.

/// Decides whether the user is entitled to a blueprint.
pub trait LicenseCheck {
    fn has_license(&self, blueprint: &str) -> bool;
}

/// No entitlement system is wired in yet: every paid blueprint stays locked.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLicense;

impl LicenseCheck for NoLicense {
    fn has_license(&self, _blueprint: &str) -> bool {
        false
    }
}

impl<F> LicenseCheck for F
where
    F: Fn(&str) -> bool,
{
    fn has_license(&self, blueprint: &str) -> bool {
        self(blueprint)
    }
}
