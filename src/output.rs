use std::path::{Path, PathBuf};

use crate::Direction;

/// Derives the default output path from an input path.
///
/// The source extension (e.g., `.sam` for sam-to-bam) is stripped only when
/// its first occurrence in the path starts at the final `.`. The destination
/// extension is then appended. A path whose final extension does not match is
/// kept intact, so `data.fastq` derives to `data.fastq.bam`.
pub fn derive(src: &Path, direction: Direction) -> PathBuf {
    let old_extension = format!(".{}", direction.src_extension());

    let mut dst = src.as_os_str().to_os_string();

    if let Some(s) = src.to_str() {
        if let (Some(i), Some(j)) = (s.find(&old_extension), s.rfind('.')) {
            if i == j {
                let mut t = String::from(s);
                t.replace_range(j..j + old_extension.len(), "");
                dst = t.into();
            }
        }
    }

    dst.push(format!(".{}", direction.dst_extension()));

    PathBuf::from(dst)
}
