/// line separator used in the files Pio tools read on the host platform
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// rewrite a Monker range body into Pio's `hand:weight,` notation.
///
/// the input alternates hand lines (index 2k) and metadata lines (index
/// 2k+1); the weight is the metadata up to the first `;`. a trailing line
/// without a partner is dropped, not an error. output lines are joined by
/// [`LINE_SEP`] with no trailing separator.
pub fn translate(contents: &str) -> String {
    contents
        .lines()
        .collect::<Vec<&str>>()
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .map(|(hand, meta)| (hand, meta.split_once(';').map_or(meta, |(weight, _)| weight)))
        .map(|(hand, weight)| format!("{}:{},", hand, weight))
        .collect::<Vec<String>>()
        .join(LINE_SEP)
}
