use crate::monker::Line;
use std::path::PathBuf;

/// file extension of PioSolver range files
pub const SUFFIX: &str = "txt";

/// nested directory for a betting line, one segment per action name, in
/// chronological order
pub fn directory(line: &Line) -> PathBuf {
    line.iter().map(|action| action.name()).collect()
}

/// file name for a betting line: every compact token in order, no separator,
/// then the Pio extension
pub fn filename(line: &Line) -> String {
    format!(
        "{}.{}",
        line.iter().map(|action| action.to_string()).collect::<String>(),
        SUFFIX
    )
}
