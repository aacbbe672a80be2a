use buildstamp_core::WILDCARD;

/// Leading characters that mark a value as an already-structured constraint
/// expression rather than a bare version.
const CONSTRAINT_PREFIXES: [char; 9] = ['<', '>', '=', '~', '^', '[', '(', 'x', 'X'];

/// Normalize a raw version value into a manifest-safe constraint string.
///
/// The wildcard token and anything already shaped like a comparator or
/// range expression pass through untouched; a bare version becomes a
/// minimum-version constraint. Pure classification, no side effects.
pub fn format_constraint(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value == WILDCARD {
        return Some(value.to_string());
    }
    if value.starts_with(CONSTRAINT_PREFIXES) || value.contains(' ') {
        return Some(value.to_string());
    }
    Some(format!(">={value}"))
}
