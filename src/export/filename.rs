//! Filename sanitization for export output.

/// Printable characters rejected by at least one mainstream filesystem.
///
/// The portable superset (NTFS rules); POSIX filesystems forbid fewer, but a
/// proposed filename should survive being saved anywhere.
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every character a filesystem could reject with an underscore.
///
/// ASCII control characters and the forbidden set above are replaced;
/// everything else passes through verbatim.
pub fn encode_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_control() || FORBIDDEN.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
