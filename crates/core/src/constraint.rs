/// The dependency specifier that requests "whatever is currently latest".
pub const WILDCARD: &str = "*";

/// Raw server dependency constraint as configured. `raw` is `None` when no
/// constraint was given at all; only the exact wildcard token triggers a
/// remote lookup, any other string is a literal constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyConstraint {
    pub raw: Option<String>,
}

impl DependencyConstraint {
    pub fn new(raw: Option<String>) -> Self {
        Self { raw }
    }

    pub fn is_wildcard(&self) -> bool {
        self.raw.as_deref() == Some(WILDCARD)
    }
}

/// Outcome of server dependency resolution. `concrete` is absent when no
/// constraint was configured or the wildcard lookup failed; `manifest_form`
/// is derived independently and may still be present in that case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedDependencyVersion {
    pub concrete: Option<String>,
    pub manifest_form: Option<String>,
}
