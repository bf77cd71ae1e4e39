use super::definitions::TARGET_ALIASES;

/// Expand a shorthand target alias to its full system image tag
///
/// Expanded tags are never aliases themselves, so the expansion is
/// idempotent. Unknown targets are returned unchanged.
pub fn normalize_target_alias(target: &str) -> String {
    TARGET_ALIASES
        .iter()
        .find(|(alias, _)| *alias == target)
        .map(|(_, expanded)| (*expanded).to_string())
        .unwrap_or_else(|| target.to_string())
}
