//! Platform-aware filename sanitization.
//!
//! Maps a human-readable track title to a stem that is legal as a file name
//! on the target filesystem. Substitution only: no truncation, no whitespace
//! collapsing, no trimming.

/// Target operating system family for sanitization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Darwin,
}

impl Platform {
    /// Resolve the platform from the compile-time target. Targets that are
    /// neither Linux nor macOS get the Windows rules, the strictest set.
    pub fn host() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Windows
        }
    }
}

/// Replaces or drops characters that are illegal in file names on the given
/// platform.
///
/// Windows rejects `\ / : * ? " < > |`: most become `-`, `:` becomes ` -`,
/// and the angle brackets are dropped. Darwin shares the Windows table.
/// POSIX filesystems only reject `/`, which becomes a space.
///
/// The result never contains a path separator, so a name built from it stays
/// in its directory.
pub fn sanitize(title: &str, platform: Platform) -> String {
    match platform {
        Platform::Linux => title.replace('/', " "),
        Platform::Windows | Platform::Darwin => {
            let mut stem = String::with_capacity(title.len());
            for c in title.chars() {
                match c {
                    '\\' | '/' | '*' | '?' | '"' | '|' => stem.push('-'),
                    ':' => stem.push_str(" -"),
                    '<' | '>' => {}
                    _ => stem.push(c),
                }
            }
            stem
        }
    }
}
