use crate::types::files::{DirEntry, EntryKind};

const DIRECTORIES: &[(&str, &[(&str, EntryKind)])] = &[
    (
        "/",
        &[
            ("documents", EntryKind::Directory),
            ("pictures", EntryKind::Directory),
            ("music", EntryKind::Directory),
            ("projects", EntryKind::Directory),
            ("readme.txt", EntryKind::File),
        ],
    ),
    (
        "/documents",
        &[("todo.txt", EntryKind::File), ("ideas.txt", EntryKind::File)],
    ),
    ("/pictures", &[("vacation.txt", EntryKind::File)]),
    ("/projects", &[("flutter_app", EntryKind::Directory)]),
    (
        "/projects/flutter_app",
        &[("README.md", EntryKind::File), ("main.dart", EntryKind::File)],
    ),
];

const CONTENTS: &[(&str, &str)] = &[
    ("/readme.txt", "Welcome to LoveOS terminal!"),
    (
        "/documents/todo.txt",
        "1. Learn Flutter\n2. Build awesome apps\n3. Share with the world",
    ),
    (
        "/documents/ideas.txt",
        "App ideas:\n- Dating app with AI\n- Virtual pet simulator\n- Productivity tracker",
    ),
    (
        "/pictures/vacation.txt",
        "Beautiful beach sunset picture description",
    ),
    (
        "/projects/flutter_app/README.md",
        "# Flutter App\n\nThis is a sample Flutter application.",
    ),
    (
        "/projects/flutter_app/main.dart",
        "void main() {\n  print(\"Hello, Flutter!\");\n}",
    ),
];

/// `/docs/` and `/docs` name the same directory.
fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    }
}

/// Entries of a mock directory; unknown paths are empty.
pub fn list_dir(path: &str) -> Vec<DirEntry> {
    let path = normalize(path);
    DIRECTORIES
        .iter()
        .find(|(dir, _)| *dir == path)
        .map(|(_, entries)| {
            entries
                .iter()
                .map(|(name, kind)| DirEntry {
                    name: (*name).to_string(),
                    kind: *kind,
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn read_file(path: &str) -> Option<&'static str> {
    CONTENTS
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, content)| *content)
}
