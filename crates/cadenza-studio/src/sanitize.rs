use jiff::Zoned;

/// Prefix for generated default file names
pub const DEFAULT_FILENAME_PREFIX: &str = "tts_";

/// Turn a user-suggested name into a filesystem-safe stem
///
/// An empty hint falls back to `tts_<YYYYMMDD_HHMMSS>` from `now`, so a
/// listing sorted descending by name shows default-named files newest
/// first. Every character outside `[A-Za-z0-9_-]` is replaced
/// one-for-one with `_`; consecutive replacements are not collapsed.
/// The result carries no uniqueness guarantee: colliding stems
/// overwrite prior artifacts.
pub fn sanitize(hint: &str, now: &Zoned) -> String {
    let stem = if hint.is_empty() {
        format!("{DEFAULT_FILENAME_PREFIX}{}", now.strftime("%Y%m%d_%H%M%S"))
    } else {
        hint.to_owned()
    };

    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}
