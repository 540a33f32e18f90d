use crate::domain::model::Target;
use std::path::Path;

const YAML_MARKER: &str = ".yaml";

/// Picks the build target for `path`.
///
/// A file whose lower-cased name contains `.yaml` anywhere selects the
/// version named after its stem; anything else, including no file name at
/// all, selects every version.
pub fn select_target(path: &Path) -> Target {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !name.to_lowercase().contains(YAML_MARKER) {
        return Target::All;
    }

    Target::Named(stem(&name).to_string())
}

/// File name without its last suffix. A dot in first or last position does
/// not start a suffix, so `.yaml` and `foo.yaml.` are kept whole.
fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => &name[..i],
        _ => name,
    }
}
