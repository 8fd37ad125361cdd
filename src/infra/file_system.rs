use crate::domain::models::{Category, Listing};
use anyhow::Context;
use log::{debug, info, warn};
use std::path::Path;

/// Recursively lists the headers and sources under `root` in walk order.
///
/// A missing root yields an empty listing. Symlinks are not followed; a
/// symlink to a directory is skipped, any other symlink (including a dangling
/// one) is classified by its own name.
pub fn enumerate(root: &Path) -> anyhow::Result<Listing> {
    info!("Listing C/C++ files in: {}", root.display());

    let mut listing = Listing::default();

    if !root.is_dir() {
        warn!("Root directory does not exist: {}", root.display());
        return Ok(listing);
    }

    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_symlink() && path.is_dir() {
            debug!("Skipping symlinked directory: {}", path.display());
            continue;
        }

        match Category::classify(path) {
            Some(category) => {
                debug!("Found {} file: {}", category, path.display());
                listing.push(path.to_path_buf(), category);
            }
            None => debug!("Unrecognized extension, skipping: {}", path.display()),
        }
    }

    info!(
        "Found {} matching files ({} headers, {} sources)",
        listing.len(),
        listing.headers().len(),
        listing.sources().len()
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn test_enumerate_classifies_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.hpp"));
        touch(&root.join("b.cpp"));
        touch(&root.join("c.txt"));
        touch(&root.join("sub/d.h"));

        let listing = enumerate(root).unwrap();

        assert_eq!(
            sorted(listing.headers()),
            vec![root.join("a.hpp"), root.join("sub/d.h")]
        );
        assert_eq!(listing.sources(), vec![root.join("b.cpp")]);
        assert!(!listing.paths().contains(&root.join("c.txt")));
    }

    #[test]
    fn test_enumerate_finds_every_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let expected = vec![
            root.join("deep/er/still/x.c"),
            root.join("deep/y.hpp"),
            root.join("main.cpp"),
            root.join("main.h"),
        ];
        for path in &expected {
            touch(path);
        }
        touch(&root.join("deep/README.md"));
        touch(&root.join("noext"));
        fs::create_dir_all(root.join("empty/nested")).unwrap();

        let listing = enumerate(root).unwrap();

        assert_eq!(sorted(listing.paths()), expected);
    }

    #[test]
    fn test_enumerate_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let listing = enumerate(&temp_dir.path().join("does-not-exist")).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_enumerate_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let listing = enumerate(temp_dir.path()).unwrap();
        assert!(listing.headers().is_empty());
        assert!(listing.sources().is_empty());
    }

    #[test]
    fn test_enumerate_keeps_root_prefix() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("Include/api.h"));

        let root = temp_dir.path().join("Include");
        let listing = enumerate(&root).unwrap();

        assert_eq!(listing.headers(), vec![root.join("api.h")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let outside = temp_dir.path().join("outside");
        touch(&outside.join("hidden.h"));
        touch(&outside.join("target.cpp"));

        let root = temp_dir.path().join("root");
        fs::create_dir_all(&root).unwrap();
        symlink(outside.join("target.cpp"), root.join("link.cpp")).unwrap();
        symlink(&outside, root.join("linked_dir")).unwrap();

        let listing = enumerate(&root).unwrap();

        assert_eq!(listing.sources(), vec![root.join("link.cpp")]);
        assert!(listing.headers().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_dangling_symlink() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        symlink(root.join("gone.h"), root.join("x.h")).unwrap();

        let listing = enumerate(root).unwrap();

        assert_eq!(listing.headers(), vec![root.join("x.h")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_enumerate_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let header = root.join(OsStr::from_bytes(b"caf\xe9.h"));
        File::create(&header).unwrap();

        let listing = enumerate(root).unwrap();

        assert_eq!(listing.headers(), vec![header]);
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_unreadable_dir_is_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("Source");
        let locked = root.join("locked");
        touch(&locked.join("hidden.cpp"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores directory permissions
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = enumerate(&root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains(&root.display().to_string()));
    }
}
