use std::path::Path;

use crate::error::{PairError, PairResult};
use crate::pairs::CandidatePair;

/// Renders pairs as `"<frame1> <frame2>"` lines joined by `\n`, without a
/// trailing newline.
pub fn format_pairs(pairs: &[CandidatePair<'_>]) -> String {
    pairs
        .iter()
        .map(|pair| pair.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the pair file, creating parent directories as needed.
pub fn write_pairs(path: &Path, pairs: &[CandidatePair<'_>]) -> PairResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PairError::io(parent, e))?;
    }
    std::fs::write(path, format_pairs(pairs)).map_err(|e| PairError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_have_no_trailing_newline() {
        let pairs = [
            CandidatePair::new("a_000000_00.jpg", "a_000000_01.jpg"),
            CandidatePair::new("a_000000_00.jpg", "a_000001_00.jpg"),
        ];
        assert_eq!(
            format_pairs(&pairs),
            "a_000000_00.jpg a_000000_01.jpg\na_000000_00.jpg a_000001_00.jpg"
        );
        assert_eq!(format_pairs(&[]), "");
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("pairs.txt");
        let pairs = [CandidatePair::new("x_000000_00.jpg", "x_000000_01.jpg")];
        write_pairs(&path, &pairs).expect("write pairs");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "x_000000_00.jpg x_000000_01.jpg"
        );
    }
}
