use std::path::Path;

/// Render `path` relative to `root` for reports.
///
/// The result always uses forward slashes so reports read the same on every platform.
/// Paths that are not under `root` are rendered as-is.
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::display_relative;
    use std::path::Path;

    #[test]
    fn strips_root_prefix() {
        let root = Path::new("/srv/site");
        let result = display_relative(root, Path::new("/srv/site/blog/post.html"));
        assert_eq!(result, "blog/post.html");
    }

    #[test]
    fn normalises_backslashes() {
        let result = display_relative(Path::new("root"), Path::new("root/css\\main.css"));
        assert_eq!(result, "css/main.css");
    }

    #[test]
    fn keeps_paths_outside_root() {
        let result = display_relative(Path::new("/srv/site"), Path::new("/tmp/other.js"));
        assert_eq!(result, "/tmp/other.js");
    }
}
