//! Integration tests for shallow listings.

mod common;

use abspath::probe::EntryKind;
use abspath::EntriesExt;
use common::{set, TreeFixture};

#[test]
fn test_ls_is_shallow() {
    let tree = TreeFixture::new()
        .entries(&["a.txt", "b/c.txt", ".git/config", "d/"])
        .build();
    let entries = tree.root.ls().unwrap();

    assert_eq!(
        tree.relative(entries.iter().map(|e| e.path.clone())),
        set(&["a.txt", "b", "d"])
    );
    assert!(entries.iter().all(|e| e.depth == 1));
    assert_eq!(tree.relative(entries.directories()), set(&["b", "d"]));
    assert_eq!(tree.relative(entries.files()), set(&["a.txt"]));
}

#[test]
fn test_ls_all_shows_hidden() {
    let tree = TreeFixture::new().entries(&["a", ".b", ".c/"]).build();
    let entries = tree.root.ls_all().unwrap();
    assert_eq!(
        tree.relative(entries.iter().map(|e| e.path.clone())),
        set(&[".b", ".c", "a"])
    );
    assert_eq!(tree.relative(entries.directories()), set(&[".c"]));
}

#[test]
fn test_files_with_extension() {
    let tree = TreeFixture::new()
        .entries(&["a.json", "b.json", "c.rs", "d.json/"])
        .build();
    let entries = tree.root.ls().unwrap();
    assert_eq!(
        tree.relative(entries.files_with_extension("json")),
        set(&["a.json", "b.json"])
    );
}

#[test]
fn test_empty_directory() {
    let tree = TreeFixture::new().entries(&["empty/"]).build();
    assert!(tree.root.join("empty").ls().unwrap().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let tree = TreeFixture::new().build();
    let err = tree.root.join("missing").ls().unwrap_err();
    assert!(err.is_not_found());
}

#[cfg(unix)]
#[test]
fn test_symlinks_keep_their_kind() {
    let tree = TreeFixture::new()
        .entries(&["dir/"])
        .symlink("alias", "dir")
        .build();
    let entries = tree.root.ls().unwrap();
    let alias = entries
        .iter()
        .find(|e| e.path.basename() == "alias")
        .unwrap();
    assert_eq!(alias.kind, EntryKind::Symlink);
    assert_eq!(tree.relative(entries.directories()), set(&["dir"]));
}
