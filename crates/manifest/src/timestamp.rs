use chrono::Utc;

/// Compact UTC timestamp used in build identifiers, `yyyyMMddHHmmss`.
pub fn utc_build_timestamp() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}
