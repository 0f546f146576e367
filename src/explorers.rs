use std::path::Path;

/// A well-known file manager the user can pick without typing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerEntry {
    pub name: &'static str,
    pub path: &'static str,
}

/// Built-in candidates shown by the configure dialog. Selection is by index
/// into this slice; the entries are never looked up by display name.
pub const COMMON_EXPLORERS: &[ExplorerEntry] = &[
    ExplorerEntry {
        name: "Finder",
        path: "/System/Applications/Finder.app",
    },
    ExplorerEntry {
        name: "Path Finder",
        path: "/Applications/Path Finder.app",
    },
    ExplorerEntry {
        name: "Bloom",
        path: "/Applications/Bloom.app",
    },
    ExplorerEntry {
        name: "Commander One",
        path: "/Applications/Commander One - file manager.app",
    },
    ExplorerEntry {
        name: "ForkLift 3",
        path: "/Applications/ForkLift 3.app",
    },
    ExplorerEntry {
        name: "muCommander",
        path: "/Applications/muCommander.app",
    },
    ExplorerEntry {
        name: "Directory Utility",
        path: "/Applications/Directory Utility.app",
    },
];

/// Human readable name for an explorer path: the file name with any `.app`
/// bundle suffix stripped.
pub fn display_name(explorer_path: &str) -> String {
    let base = Path::new(explorer_path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| explorer_path.to_string());
    base.strip_suffix(".app").unwrap_or(&base).to_string()
}
