use crate::cli::GlobalFlags;

/// Who a mutation is attributed to: `--actor`, then `fallback`, then `$USER`.
#[must_use]
pub fn resolve_actor(flags: &GlobalFlags, fallback: Option<&str>) -> String {
    flags
        .actor
        .as_deref()
        .or(fallback)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| String::from("gemba"))
}
