use std::ffi::OsStr;
use std::io;
use std::path::Path;

/// File extension marking a problem description.
pub const DESCRIPTION_EXTENSION: &str = "desc";

/// List the problem names (file stems) of all description files in a
/// directory. Order follows the directory listing and is OS-dependent;
/// the final report is sorted independently of this order.
pub fn discover_problems(description_dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(description_dir)? {
        let path = entry?.path();
        if path.extension().and_then(OsStr::to_str) != Some(DESCRIPTION_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
            names.push(stem.to_string());
        }
    }

    Ok(names)
}
