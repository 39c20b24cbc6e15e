//! Positional path arguments to an ordered list of files.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::FileError;

/// A path taken from the command line, made absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    pub path: PathBuf,
    /// False when canonicalization failed and `path` is only a best-effort
    /// absolute form of the argument.
    pub canonical: bool,
}

impl ResolvedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Canonicalize `path`, falling back to its absolute form with a warning.
pub fn resolve_path(path: &Path) -> ResolvedFile {
    match fs::canonicalize(path) {
        Ok(canonical) => ResolvedFile {
            path: canonical,
            canonical: true,
        },
        Err(err) => {
            let fallback = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            warn!(
                path = %path.display(),
                error = %err,
                "cannot canonicalize argument, using it as given"
            );
            ResolvedFile {
                path: fallback,
                canonical: false,
            }
        }
    }
}

/// Resolve positional arguments into the files to operate on.
///
/// Arguments are processed in order; blank ones are skipped. When
/// `expand_folders` is set, a directory is replaced by its files: every
/// regular file below it when `recursive`, otherwise its immediate regular
/// children. Hidden entries are left out either way. Anything else is kept
/// as a single path, whether it exists or not.
pub fn resolve_files(
    arguments: &[String],
    recursive: bool,
    expand_folders: bool,
) -> Result<Vec<ResolvedFile>, FileError> {
    let mut files = Vec::new();

    for argument in arguments {
        if argument.trim().is_empty() {
            continue;
        }

        let resolved = resolve_path(Path::new(argument));

        if expand_folders && resolved.path.is_dir() {
            let canonical = resolved.canonical;
            let children = if recursive {
                walk_files(&resolved.path)?
            } else {
                list_files(&resolved.path)?
            };
            debug!(
                dir = %resolved.path.display(),
                recursive,
                count = children.len(),
                "expanded directory argument"
            );
            files.extend(
                children
                    .into_iter()
                    .map(|path| ResolvedFile { path, canonical }),
            );
        } else {
            files.push(resolved);
        }
    }

    Ok(files)
}

/// Immediate regular, non-hidden children of `dir`, in human name order.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    let read_dir = |source| FileError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir)? {
        let entry = entry.map_err(read_dir)?;
        let path = entry.path();
        if is_hidden_name(&entry.file_name().to_string_lossy()) || !path.is_file() {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| compare_file_names(a, b));
    Ok(files)
}

/// Every regular file below `dir`, depth-first, each level in human name order.
///
/// Hidden files are skipped and hidden directories are not descended into.
/// Symbolic links are followed. A link whose target is gone is skipped like
/// any other non-file; a link cycle or an unreadable directory is an error.
pub fn walk_files(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by(|a, b| {
            human_name_cmp(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
        })
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                debug!(path = ?err.path(), "skipping dangling symlink");
                continue;
            }
            Err(source) => {
                return Err(FileError::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// A symlink whose target does not exist. Loops are never dangling.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_none()
        && err
            .io_error()
            .is_some_and(|io| io.kind() == io::ErrorKind::NotFound)
        && err.path().is_some_and(|path| {
            fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
        })
}

fn is_hidden(entry: &DirEntry) -> bool {
    is_hidden_name(&entry.file_name().to_string_lossy())
}

fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

fn compare_file_names(a: &Path, b: &Path) -> Ordering {
    let name = |path: &Path| {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    human_name_cmp(&name(a), &name(b))
}

/// Split a name into alternating runs of digits and non-digits.
fn chunks(name: &str) -> impl Iterator<Item = &str> {
    let mut rest = name;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Human-friendly name comparison: case-insensitive, with digit runs compared
/// by numeric value, so `file2` sorts before `file10`.
///
/// Names that only differ in case or leading zeros fall back to plain string
/// order to keep the result total.
pub fn human_name_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let is_number = |s: &str| s.starts_with(|c: char| c.is_ascii_digit());
                let ordering = if is_number(x) && is_number(y) {
                    compare_numbers(x, y)
                } else {
                    x.to_lowercase().cmp(&y.to_lowercase())
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir_all};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).expect("create parent");
        }
        File::create(path).expect("create file");
    }

    fn names(files: &[ResolvedFile], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|file| {
                file.path
                    .strip_prefix(root)
                    .expect("inside root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    fn arg(path: &Path) -> Vec<String> {
        vec![path.to_string_lossy().into_owned()]
    }

    #[test]
    fn human_order_compares_numbers_by_value() {
        let mut names = vec!["file10.txt", "a.txt", "file2.txt", "File1.txt", "file02b.txt"];
        names.sort_by(|a, b| human_name_cmp(a, b));
        assert_eq!(
            names,
            vec!["a.txt", "File1.txt", "file2.txt", "file02b.txt", "file10.txt"]
        );
        assert_eq!(human_name_cmp("S01E09", "s01e10"), Ordering::Less);
        assert_eq!(human_name_cmp("x", "x"), Ordering::Equal);
    }

    #[test]
    fn flat_directory_lists_visible_files_in_human_order() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical temp");
        for name in ["file10.txt", "a.txt", "file2.txt", ".hidden.txt"] {
            touch(&root.join(name));
        }
        touch(&root.join("sub").join("nested.txt"));

        let files = resolve_files(&arg(&root), false, true).expect("resolve");
        assert_eq!(names(&files, &root), vec!["a.txt", "file2.txt", "file10.txt"]);
        assert!(files.iter().all(|file| file.canonical));
    }

    #[test]
    fn recursive_walk_collects_every_file_once() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical temp");
        for name in [
            "b.mkv",
            "Season 10/e1.mkv",
            "Season 2/e10.mkv",
            "Season 2/e9.mkv",
            "Season 2/extras/clip.mkv",
            ".cache/skip.mkv",
            "a.mkv",
        ] {
            touch(&root.join(name));
        }

        let files = resolve_files(&arg(&root), true, true).expect("resolve");
        assert_eq!(
            names(&files, &root),
            vec![
                "a.mkv",
                "b.mkv",
                "Season 2/e9.mkv",
                "Season 2/e10.mkv",
                "Season 2/extras/clip.mkv",
                "Season 10/e1.mkv",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn recursive_walk_skips_dangling_symlinks() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical temp");
        touch(&root.join("Season 1").join("e1.mkv"));
        std::os::unix::fs::symlink(
            root.join("Season 1").join("gone.mkv"),
            root.join("Season 1").join("old-link.mkv"),
        )
        .expect("create symlink");

        let flat = resolve_files(&arg(&root.join("Season 1")), false, true).expect("flat");
        assert_eq!(names(&flat, &root), vec!["Season 1/e1.mkv"]);
        let walked = resolve_files(&arg(&root), true, true).expect("recursive");
        assert_eq!(names(&walked, &root), vec!["Season 1/e1.mkv"]);
    }

    #[cfg(unix)]
    #[test]
    fn recursive_walk_reports_symlink_loop() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical temp");
        let dir = root.join("dir");
        touch(&dir.join("a.mkv"));
        std::os::unix::fs::symlink(&dir, dir.join("loop")).expect("create symlink");

        let err = resolve_files(&arg(&root), true, true).unwrap_err();
        match err {
            FileError::Walk { path, source } => {
                assert_eq!(path, root);
                assert!(source.loop_ancestor().is_some());
            }
            other => panic!("expected walk error, got {other:?}"),
        }
    }

    #[test]
    fn listing_a_non_directory_fails() {
        let temp = TempDir::new().expect("temp dir");
        let file = temp.path().join("episode.mkv");
        touch(&file);

        let err = list_files(&file).unwrap_err();
        assert!(matches!(err, FileError::ListDirectory { ref path, .. } if *path == file));
    }

    #[test]
    fn arguments_keep_their_order() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical temp");
        touch(&root.join("dir").join("b.txt"));
        touch(&root.join("dir").join("a.txt"));
        touch(&root.join("z.txt"));

        let arguments = vec![
            root.join("z.txt").to_string_lossy().into_owned(),
            "   ".to_string(),
            root.join("dir").to_string_lossy().into_owned(),
        ];
        let files = resolve_files(&arguments, false, true).expect("resolve");
        assert_eq!(names(&files, &root), vec!["z.txt", "dir/a.txt", "dir/b.txt"]);
    }

    #[test]
    fn directory_is_kept_when_expansion_is_not_requested() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical temp");
        touch(&root.join("a.txt"));

        let files = resolve_files(&arg(&root), true, false).expect("resolve");
        assert_eq!(files, vec![ResolvedFile { path: root, canonical: true }]);
    }

    #[test]
    fn missing_path_falls_back_to_absolute_form() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("missing").join("episode.mkv");

        let files = resolve_files(&arg(&missing), false, true).expect("resolve");
        assert_eq!(files.len(), 1);
        assert!(!files[0].canonical);
        assert!(files[0].path.is_absolute());
        assert!(files[0].path.ends_with("missing/episode.mkv"));
    }

    #[test]
    fn empty_arguments_resolve_to_nothing() {
        assert!(resolve_files(&[], true, true).expect("resolve").is_empty());
        let blanks = vec![String::new(), " \t".to_string()];
        assert!(resolve_files(&blanks, false, true).expect("resolve").is_empty());
    }
}
