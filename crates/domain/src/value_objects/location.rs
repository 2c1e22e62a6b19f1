//! Location alias table.
//!
//! The assistant platform resolves place names to canonical entity values
//! that do not always match the names stored in `locations`.

/// Canonical platform name -> stored location name.
pub const LOCATION_ALIASES: &[(&str, &str)] =
    &[("Federal Territory of Kuala Lumpur", "Kuala Lumpur")];

/// Substitute a known alias, or pass the raw name through unchanged.
pub fn resolve_location(raw: &str) -> &str {
    LOCATION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, name)| *name)
        .unwrap_or(raw)
}
