//! Directory traversal for candidate files.
//!
//! Walks one mod directory, keeps files that survive the [`ExclusionSet`],
//! and orders them by full-path length.

use crate::Result;
use crate::creation::filters::ExclusionSet;
use crate::creation::filters::Verdict;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Files selected from one directory, plus what the filters dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Surviving files, ordered by path length ascending.
    pub files: Vec<PathBuf>,

    /// Entries dropped because they lie under an exclusion path. An excluded
    /// directory is pruned without being read and counts once.
    pub excluded: usize,

    /// Files dropped by the extension rule.
    pub rejected: usize,

    /// Symlinks left out because they do not resolve to a regular file.
    pub links_skipped: usize,
}

/// Collects the packageable files under `dir`.
///
/// Regular files are returned, and so are symlinks whose target is a regular
/// file; they are stored under the link's own path. Symlinked directories
/// are not descended into, and they are counted in
/// [`Candidates::links_skipped`] together with dangling links. Excluded
/// directories are pruned before they are read. Siblings are visited in
/// file-name order, and the final list is stably sorted by the byte length
/// of the full path, so the result is deterministic.
///
/// # Examples
///
/// ```no_run
/// use ncpack_core::creation::filters::ExclusionSet;
/// use ncpack_core::creation::filters::MatchMode;
/// use ncpack_core::creation::walker::collect_candidates;
/// use std::path::Path;
///
/// let exclusions = ExclusionSet::new(vec![], MatchMode::Literal);
/// let candidates = collect_candidates(Path::new("/mods/generic"), &exclusions)?;
/// println!("{} files", candidates.files.len());
/// # Ok::<(), ncpack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::PackError::Walk`] if a directory cannot be read.
pub fn collect_candidates(dir: &Path, exclusions: &ExclusionSet) -> Result<Candidates> {
    let mut candidates = Candidates::default();
    let mut pruned = 0;

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let prune = entry.file_type().is_dir() && exclusions.is_excluded(entry.path());
            pruned += usize::from(prune);
            !prune
        });

    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            if !exclusions.is_excluded(entry.path()) && !resolves_to_file(entry.path()) {
                candidates.links_skipped += 1;
                continue;
            }
        } else if !file_type.is_file() {
            continue;
        }

        match exclusions.classify(entry.path()) {
            Verdict::Include => candidates.files.push(entry.into_path()),
            Verdict::Excluded => candidates.excluded += 1,
            Verdict::RejectedExtension => candidates.rejected += 1,
        }
    }

    candidates.excluded += pruned;
    sort_by_path_length(&mut candidates.files);
    Ok(candidates)
}

fn resolves_to_file(link: &Path) -> bool {
    std::fs::metadata(link).is_ok_and(|meta| meta.is_file())
}

/// Stable sort by full path length in bytes.
pub fn sort_by_path_length(files: &mut [PathBuf]) {
    files.sort_by_key(|path| path.as_os_str().len());
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::creation::filters::MatchMode;
    use std::fs;
    use tempfile::TempDir;

    fn no_exclusions() -> ExclusionSet {
        ExclusionSet::new(vec![], MatchMode::Literal)
    }

    #[test]
    fn test_collects_files_recursively() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::write(temp.path().join("top.txt"), "1").unwrap();
        fs::write(temp.path().join("a/b/deep.txt"), "2").unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        assert_eq!(candidates.files.len(), 2);
        assert!(candidates.files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("empty/nested")).unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        assert!(candidates.files.is_empty());
    }

    #[test]
    fn test_sorted_by_path_length() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dir")).unwrap();
        fs::write(temp.path().join("dir/zz.txt"), "").unwrap();
        fs::write(temp.path().join("abcdefgh.txt"), "").unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        let lengths: Vec<_> = candidates
            .files
            .iter()
            .map(|p| p.as_os_str().len())
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        assert!(candidates.files[0].ends_with("b.txt"));
    }

    #[test]
    fn test_equal_lengths_keep_name_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("c.txt"), "").unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        let names: Vec<_> = candidates
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_counts_filtered_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        fs::write(temp.path().join("bin/a.fx"), "").unwrap();
        fs::write(temp.path().join("bin/b.psd"), "").unwrap();
        fs::write(temp.path().join("art.psd"), "").unwrap();
        fs::write(temp.path().join("keep.txt"), "").unwrap();

        let exclusions = ExclusionSet::new(vec![temp.path().join("bin")], MatchMode::Literal);
        let candidates = collect_candidates(temp.path(), &exclusions).unwrap();

        assert_eq!(candidates.files, vec![temp.path().join("keep.txt")]);
        assert_eq!(candidates.excluded, 1);
        assert_eq!(candidates.rejected, 1);
    }

    #[test]
    fn test_excluded_file_paths_count_per_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("build.sga"), "").unwrap();
        fs::write(temp.path().join("build.sga.bak"), "").unwrap();
        fs::write(temp.path().join("keep.txt"), "").unwrap();

        let exclusions =
            ExclusionSet::new(vec![temp.path().join("build.sga")], MatchMode::Literal);
        let candidates = collect_candidates(temp.path(), &exclusions).unwrap();

        assert_eq!(candidates.files, vec![temp.path().join("keep.txt")]);
        assert_eq!(candidates.excluded, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_excluded_directory_is_not_read() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let cache = temp.path().join("cache");
        fs::create_dir_all(cache.join("locked")).unwrap();
        fs::write(cache.join("locked/a.bin"), "x").unwrap();
        fs::write(temp.path().join("keep.txt"), "").unwrap();
        fs::set_permissions(cache.join("locked"), fs::Permissions::from_mode(0o000)).unwrap();

        let exclusions = ExclusionSet::new(vec![cache.clone()], MatchMode::Component);
        let result = collect_candidates(temp.path(), &exclusions);

        fs::set_permissions(cache.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
        let candidates = result.unwrap();
        assert_eq!(candidates.files, vec![temp.path().join("keep.txt")]);
        assert_eq!(candidates.excluded, 1);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let result = collect_candidates(&temp.path().join("missing"), &no_exclusions());
        assert!(matches!(result, Err(crate::PackError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_collected() {
        let temp = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        fs::write(shared.path().join("shared.lua"), "data").unwrap();
        fs::write(temp.path().join("real.txt"), "data").unwrap();
        std::os::unix::fs::symlink(shared.path().join("shared.lua"), temp.path().join("s.lua"))
            .unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        assert_eq!(
            candidates.files,
            vec![temp.path().join("s.lua"), temp.path().join("real.txt")]
        );
        assert_eq!(candidates.links_skipped, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_and_dangling_links_are_counted() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("inner.txt"), "x").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("dir_link")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.txt"), temp.path().join("dangling"))
            .unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        assert!(candidates.files.is_empty());
        assert_eq!(candidates.links_skipped, 2);

        let exclusions =
            ExclusionSet::new(vec![temp.path().join("dangling")], MatchMode::Literal);
        let candidates = collect_candidates(temp.path(), &exclusions).unwrap();
        assert_eq!(candidates.links_skipped, 1);
        assert_eq!(candidates.excluded, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_psd_is_still_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.txt"), "data").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.txt"), temp.path().join("art.psd"))
            .unwrap();

        let candidates = collect_candidates(temp.path(), &no_exclusions()).unwrap();
        assert_eq!(candidates.files, vec![temp.path().join("real.txt")]);
        assert_eq!(candidates.rejected, 1);
    }

    #[test]
    fn test_sort_by_path_length_is_stable() {
        let mut files = vec![
            PathBuf::from("/r/bb"),
            PathBuf::from("/r/a"),
            PathBuf::from("/r/aa"),
        ];
        sort_by_path_length(&mut files);
        assert_eq!(
            files,
            vec![
                PathBuf::from("/r/a"),
                PathBuf::from("/r/bb"),
                PathBuf::from("/r/aa"),
            ]
        );
    }
}
