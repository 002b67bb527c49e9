//! Text formatting for dropped-file listings.

use crate::FileDescriptor;

/// Size in whole kilobytes (1000 bytes), rounding halves up.
pub fn size_in_kb(size: u64) -> u64 {
    size / 1000 + u64::from(size % 1000 >= 500)
}

/// List label for one file: `"{name} ({kb}kb)"`.
pub fn file_label(file: &FileDescriptor) -> String {
    format!("{} ({}kb)", file.name, size_in_kb(file.size))
}

/// Caption summarizing how many files are waiting.
pub fn drop_summary(count: usize) -> String {
    if count == 0 {
        "No files to upload".to_string()
    } else {
        format!("Files to upload: {count}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_rounded_kilobytes() {
        assert_eq!(file_label(&FileDescriptor::new("a.txt", 2000, 0)), "a.txt (2kb)");
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(size_in_kb(0), 0);
        assert_eq!(size_in_kb(499), 0);
        assert_eq!(size_in_kb(500), 1);
        assert_eq!(size_in_kb(1499), 1);
        assert_eq!(size_in_kb(1500), 2);
        assert_eq!(size_in_kb(u64::MAX), u64::MAX / 1000 + 1);
    }

    #[test]
    fn summary_has_empty_indicator() {
        assert_eq!(drop_summary(0), "No files to upload");
        assert_eq!(drop_summary(3), "Files to upload: 3");
    }
}
