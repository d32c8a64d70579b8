use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::models::FindingReason;

/// Upper bound on symlinks followed while resolving one reference, so link loops terminate.
const MAX_SYMLINK_HOPS: usize = 40;

/// Resolve `reference` against `base_dir` into an absolute path.
///
/// Symlinks are followed for every component, including links whose target does not exist,
/// while `.` and `..` are applied as they are encountered. The result is canonical even when
/// the final target (or some of its parents) is absent. An absolute `reference` replaces
/// `base_dir`.
pub fn resolve_reference_path(base_dir: &Path, reference: &str) -> PathBuf {
    let joined = base_dir.join(reference);
    if let Ok(canonical) = fs::canonicalize(&joined) {
        return canonical;
    }

    let mut hops = 0;
    resolve_components(PathBuf::new(), &joined, &mut hops)
}

fn resolve_components(mut resolved: PathBuf, path: &Path, hops: &mut usize) -> PathBuf {
    for component in path.components() {
        match component {
            // Pushing a root or prefix replaces what was resolved so far.
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                let candidate = resolved.join(name);
                resolved = match fs::read_link(&candidate) {
                    Ok(target) if *hops < MAX_SYMLINK_HOPS => {
                        *hops += 1;
                        resolve_components(resolved, &target, hops)
                    }
                    _ => candidate,
                };
            }
        }
    }
    resolved
}

/// Classify a normalised, non-ignored reference found in a file living in `base_dir`.
///
/// Returns `None` for references that exist inside `root`. Containment is checked before
/// existence, so a target outside `root` is reported even when it exists. `root` must
/// already be canonical.
pub fn classify_reference(root: &Path, base_dir: &Path, reference: &str) -> Option<FindingReason> {
    let target = resolve_reference_path(base_dir, reference);

    if !target.starts_with(root) {
        return Some(FindingReason::OutsideRoot);
    }

    if !target.exists() {
        return Some(FindingReason::Missing);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn existing_file_inside_root_is_valid() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir_all(root.join("img")).unwrap();
        fs::write(root.join("img/logo.png"), "png").unwrap();

        assert_eq!(classify_reference(&root, &root, "img/logo.png"), None);
    }

    #[test]
    fn absent_file_inside_root_is_missing() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();

        assert_eq!(
            classify_reference(&root, &root, "img/nope.png"),
            Some(FindingReason::Missing)
        );
    }

    #[test]
    fn parent_traversal_outside_root_wins_over_existence() {
        let dir = tempdir().unwrap();
        let outer = fs::canonicalize(dir.path()).unwrap();
        let root = outer.join("site");
        let nested = root.join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(outer.join("secret.png"), "png").unwrap();

        assert_eq!(
            classify_reference(&root, &nested, "../../../secret.png"),
            Some(FindingReason::OutsideRoot)
        );
        assert_eq!(
            classify_reference(&root, &nested, "../../../../../../../../etc/passwd"),
            Some(FindingReason::OutsideRoot)
        );
    }

    #[test]
    fn leading_slash_reference_resolves_from_filesystem_root() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();

        assert_eq!(
            classify_reference(&root, &root, "/images/logo.png"),
            Some(FindingReason::OutsideRoot)
        );
    }

    #[test]
    fn parent_segments_after_missing_directories_are_applied() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::write(root.join("a.png"), "png").unwrap();

        let resolved = resolve_reference_path(&root, "ghost/../a.png");
        assert_eq!(resolved, root.join("a.png"));
        assert_eq!(classify_reference(&root, &root, "ghost/../a.png"), None);
    }

    #[test]
    fn reference_to_root_itself_is_inside() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let sub = root.join("sub");
        fs::create_dir_all(&sub).unwrap();

        assert_eq!(classify_reference(&root, &sub, ".."), None);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_to_absolute_target_is_outside() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        std::os::unix::fs::symlink("/nonexistent_site_asset_dir/x.png", root.join("x.png"))
            .unwrap();

        assert_eq!(
            resolve_reference_path(&root, "x.png"),
            PathBuf::from("/nonexistent_site_asset_dir/x.png")
        );
        assert_eq!(
            classify_reference(&root, &root, "x.png"),
            Some(FindingReason::OutsideRoot)
        );
    }

    #[cfg(unix)]
    #[test]
    fn dangling_relative_symlink_resolves_from_link_directory() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir_all(root.join("img")).unwrap();
        std::os::unix::fs::symlink("../gone/a.png", root.join("img/a.png")).unwrap();

        assert_eq!(resolve_reference_path(&root, "img/a.png"), root.join("gone/a.png"));
        assert_eq!(
            classify_reference(&root, &root, "img/a.png"),
            Some(FindingReason::Missing)
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loops_terminate() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        std::os::unix::fs::symlink("loop", root.join("loop")).unwrap();

        assert_eq!(
            classify_reference(&root, &root, "loop/a.png"),
            Some(FindingReason::Missing)
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_escaping_root_is_outside() {
        let dir = tempdir().unwrap();
        let outer = fs::canonicalize(dir.path()).unwrap();
        let root = outer.join("site");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(outer.join("shared")).unwrap();
        fs::write(outer.join("shared/a.png"), "png").unwrap();
        std::os::unix::fs::symlink(outer.join("shared"), root.join("shared")).unwrap();

        assert_eq!(
            classify_reference(&root, &root, "shared/a.png"),
            Some(FindingReason::OutsideRoot)
        );
    }
}
