use pixelfolio::content::ContentStore;
use tempfile::tempdir;

fn write_post(dir: &std::path::Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

#[test]
fn posts_are_discovered_and_sorted_newest_first() {
    let dir = tempdir().unwrap();
    write_post(
        dir.path(),
        "older.md",
        "---\ndate: 2026-01-05\n---\n# Older Post\n\ntext\n",
    );
    write_post(
        dir.path(),
        "newer.md",
        "---\ndate: 2026-06-01\n---\n# Newer Post\n\ntext\n",
    );
    write_post(dir.path(), "notes.txt", "not markdown");

    let store = ContentStore::load(dir.path());
    let titles: Vec<_> = store.posts().iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, ["Newer Post", "Older Post"]);
}

#[test]
fn posts_are_keyed_by_slugified_stem() {
    let dir = tempdir().unwrap();
    write_post(dir.path(), "Hello World.md", "# Greetings\n");

    let store = ContentStore::load(dir.path());
    let post = store.get("hello-world").unwrap();
    assert_eq!(post.title, "Greetings");
    assert_eq!(store.get("missing"), None);
}

#[test]
fn nested_directories_are_scanned() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("2026")).unwrap();
    write_post(&dir.path().join("2026"), "deep.md", "# Deep Post\n");

    let store = ContentStore::load(dir.path());
    assert_eq!(store.posts().len(), 1);
    assert_eq!(store.posts()[0].slug, "deep");
}
