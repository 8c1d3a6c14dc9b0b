//! Chunk file naming.
//!
//! A chunk of `report.pdf` with index 3 is stored as `report.pdf._3`. These
//! helpers work on plain strings so that `/` and `\` are both separators on
//! every platform.

const CHUNK_MARKER: &str = "._";

/// Final path segment: everything after the last `/` or `\`.
pub fn leaf_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Filename without its trailing extension.
pub fn stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) => &filename[..pos],
        None => filename,
    }
}

/// Trailing extension including the dot, or `""` when there is none.
pub fn extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) => &filename[pos..],
        None => "",
    }
}

/// Name of chunk `index` cut from the file at `source`.
pub fn chunk_file_name(source: &str, index: u64) -> String {
    let leaf = leaf_name(source);
    format!("{}{}{CHUNK_MARKER}{index}", stem(leaf), extension(leaf))
}

/// A chunk filename split into the original leaf name and the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkName {
    pub original: String,
    pub index: u64,
}

/// Parse `<original>._<digits>`. Anything else is not a chunk.
pub fn parse_chunk_name(leaf: &str) -> Option<ChunkName> {
    let (original, digits) = leaf.rsplit_once(CHUNK_MARKER)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some(ChunkName {
        original: original.to_string(),
        index,
    })
}

/// Leaf name of the file a chunk was cut from.
///
/// Falls back to the stem up to its last `_` for names that do not carry
/// the `._<N>` marker.
pub fn original_name(chunk_leaf: &str) -> String {
    if let Some(name) = parse_chunk_name(chunk_leaf) {
        return name.original;
    }
    let base = stem(chunk_leaf);
    match base.rfind('_') {
        Some(pos) => base[..pos].to_string(),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_name_handles_both_separators() {
        assert_eq!(leaf_name("/data/in/report.pdf"), "report.pdf");
        assert_eq!(leaf_name(r"C:\data\report.pdf"), "report.pdf");
        assert_eq!(leaf_name(r"mixed/dir\report.pdf"), "report.pdf");
        assert_eq!(leaf_name("report.pdf"), "report.pdf");
        assert_eq!(leaf_name("dir/"), "");
    }

    #[test]
    fn stem_and_extension() {
        assert_eq!(stem("report.pdf"), "report");
        assert_eq!(extension("report.pdf"), ".pdf");
        assert_eq!(stem("archive.tar.gz"), "archive.tar");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(stem("README"), "README");
        assert_eq!(extension("README"), "");
        assert_eq!(stem(".bashrc"), "");
        assert_eq!(extension(".bashrc"), ".bashrc");
    }

    #[test]
    fn chunk_names_ignore_dotted_directories() {
        assert_eq!(chunk_file_name("/data/report.pdf", 0), "report.pdf._0");
        assert_eq!(chunk_file_name("build.v2/README", 12), "README._12");
    }

    #[test]
    fn parse_chunk_name_roundtrip() {
        let parsed = parse_chunk_name("report.pdf._10").unwrap();
        assert_eq!(parsed.original, "report.pdf");
        assert_eq!(parsed.index, 10);

        assert_eq!(parse_chunk_name("report.pdf"), None);
        assert_eq!(parse_chunk_name("report.pdf._"), None);
        assert_eq!(parse_chunk_name("report.pdf._1a"), None);
    }

    #[test]
    fn original_name_keeps_underscores() {
        assert_eq!(original_name("my_report.pdf._0"), "my_report.pdf");
        assert_eq!(original_name("report.pdf._7"), "report.pdf");
        assert_eq!(original_name("README._3"), "README");
    }

    #[test]
    fn original_name_fallback_for_foreign_names() {
        assert_eq!(original_name("part_1.bin"), "part");
        assert_eq!(original_name("plain.txt"), "plain");
    }
}
