use crate::monker::Line;
use crate::pio;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// one discovered Monker range file: where it lives, and where its parent
/// directory sits relative to the input root.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Job {
    source: PathBuf,
    relative: PathBuf,
}

impl Job {
    pub fn new(source: PathBuf, relative: PathBuf) -> Self {
        Self { source, relative }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// destination of this file under the output root: the mirrored input
    /// subdirectory, one directory per action name, then the token file name
    pub fn destination(&self, output: &Path) -> anyhow::Result<PathBuf> {
        let stem = self
            .source
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("no readable stem in `{}`", self.source.display()))?;
        let line = Line::try_from(stem)?;
        Ok(output
            .join(&self.relative)
            .join(pio::directory(&line))
            .join(pio::filename(&line)))
    }

    /// convert this file: decode the name, mirror the tree, translate the
    /// body, write the result. a decode failure aborts this job only, and
    /// before anything is written.
    pub fn run(&self, output: &Path) -> anyhow::Result<()> {
        let destination = self.destination(output)?;
        let parent = destination
            .parent()
            .with_context(|| format!("no parent for `{}`", destination.display()))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory `{}`", parent.display()))?;
        let contents = std::fs::read_to_string(&self.source)
            .with_context(|| format!("read `{}`", self.source.display()))?;
        log::info!("writing Pio range file to `{}`", destination.display());
        std::fs::write(&destination, pio::translate(&contents))
            .with_context(|| format!("write `{}`", destination.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_mirrors_input_tree() {
        let job = Job::new(
            PathBuf::from("ranges/100bb/2.1.0.rng"),
            PathBuf::from("100bb"),
        );
        assert_eq!(
            job.destination(Path::new("out")).expect("valid stem"),
            PathBuf::from("out/100bb/pot/call/fold/r(100%)cf.txt")
        );
    }

    #[test]
    fn destination_at_input_root() {
        let job = Job::new(PathBuf::from("ranges/40025.rng"), PathBuf::new());
        assert_eq!(
            job.destination(Path::new("out")).expect("valid stem"),
            PathBuf::from("out/25%/r(25%).txt")
        );
    }

    #[test]
    fn destination_rejects_malformed_stem() {
        let job = Job::new(PathBuf::from("ranges/2.x.0.rng"), PathBuf::new());
        let error = job.destination(Path::new("out")).expect_err("x is not a code");
        assert!(error.to_string().contains("`x`"));
    }
}
