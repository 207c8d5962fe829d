use outpost::files::{FileStore, FsError};
use tempfile::TempDir;

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.write("notes.txt", b"hello").await.unwrap();
    let contents = store.read("notes.txt").await.unwrap();

    assert_eq!(contents, b"hello".to_vec());
}

#[tokio::test]
async fn test_read_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let result = store.read("nope.txt").await;

    assert!(matches!(result, Err(FsError::NotFound)));
}

#[tokio::test]
async fn test_write_overwrites_existing() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.write("a.txt", b"first").await.unwrap();
    store.write("a.txt", b"second").await.unwrap();

    assert_eq!(store.read("a.txt").await.unwrap(), b"second".to_vec());
}

#[tokio::test]
async fn test_binary_contents_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let blob: Vec<u8> = (0..=255).collect();
    store.write("blob.bin", &blob).await.unwrap();

    assert_eq!(store.read("blob.bin").await.unwrap(), blob);
}

#[tokio::test]
async fn test_parent_dir_name_rejected() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert!(matches!(
        store.read("../escape.txt").await,
        Err(FsError::PathEscapesRoot)
    ));
    assert!(matches!(
        store.write("../escape.txt", b"x").await,
        Err(FsError::PathEscapesRoot)
    ));
    // A parent component buried in the middle escapes just the same
    assert!(matches!(
        store.read("logs/../../etc/passwd").await,
        Err(FsError::PathEscapesRoot)
    ));
}

#[tokio::test]
async fn test_absolute_name_rejected() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert!(matches!(
        store.read("/etc/hostname").await,
        Err(FsError::PathEscapesRoot)
    ));
}

#[tokio::test]
async fn test_rejected_write_touches_nothing() {
    let outer = TempDir::new().unwrap();
    let root = outer.path().join("root");
    std::fs::create_dir(&root).unwrap();
    let store = FileStore::new(&root);

    let result = store.write("../escape.txt", b"leaked").await;

    assert!(matches!(result, Err(FsError::PathEscapesRoot)));
    assert!(!outer.path().join("escape.txt").exists());
}

#[tokio::test]
async fn test_subdirectory_names_allowed() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let store = FileStore::new(dir.path());

    store.write("sub/a.txt", b"nested").await.unwrap();

    assert_eq!(store.read("sub/a.txt").await.unwrap(), b"nested".to_vec());
}

#[tokio::test]
async fn test_curdir_component_allowed() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.write("./a.txt", b"here").await.unwrap();

    assert_eq!(store.read("a.txt").await.unwrap(), b"here".to_vec());
}

#[tokio::test]
async fn test_write_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let result = store.write("no-such-dir/a.txt", b"x").await;

    assert!(matches!(result, Err(FsError::Io(_))));
}

#[test]
fn test_root_accessor() {
    let store = FileStore::new("/srv/outpost");

    assert_eq!(store.root(), std::path::Path::new("/srv/outpost"));
}
