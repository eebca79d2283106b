//! Range conversion CLI
//!
//! Converts MonkerSolver .rng range exports into PioSolver .txt range trees,
//! mirroring the input directory structure and expanding each betting line
//! into nested action directories.

use rangetool::*;

fn main() -> anyhow::Result<()> {
    log();
    convert::Tool::run()
}
