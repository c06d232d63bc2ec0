/// File extension of the last `/`-delimited segment of `path`.
///
/// `"/a/b.tar.gz"` → `"gz"`, `"/a/b"` → `""`, `"/a/b."` → `""`.
pub fn file_extension(path: &str) -> &str {
    let last_segment = path.rsplit_once('/').map_or(path, |(_, seg)| seg);
    match last_segment.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}
