use super::validate;
use super::walk;
use std::path::PathBuf;

/// one whole conversion run: a Monker input tree, a Pio output root, and
/// whether a non-empty output may be wiped first.
pub struct Convert {
    input: PathBuf,
    output: PathBuf,
    force: bool,
}

impl Convert {
    pub fn new(input: PathBuf, output: PathBuf, force: bool) -> Self {
        Self {
            input,
            output,
            force,
        }
    }

    /// validate both trees, optionally wipe the output, then convert every
    /// discovered file in order. the first failed file aborts the run: a
    /// malformed name signals a systematic naming violation, not a one-off.
    pub fn run(&self) -> anyhow::Result<()> {
        validate::check_input(&self.input)?;
        validate::check_output(&self.output, self.force)?;
        if self.force && !validate::is_empty(&self.output)? {
            self.confirm()?;
            validate::clear(&self.output)?;
        }
        for job in walk::discover(&self.input)? {
            log::info!("processing Monker file `{}`", job.source().display());
            job.run(&self.output)?;
        }
        Ok(())
    }

    #[cfg(feature = "cli")]
    fn confirm(&self) -> anyhow::Result<()> {
        match dialoguer::Confirm::new()
            .with_prompt(format!(
                "wipe `{}` and everything under it?",
                self.output.display()
            ))
            .default(false)
            .interact()?
        {
            true => Ok(()),
            false => anyhow::bail!("aborted, output directory left untouched"),
        }
    }

    #[cfg(not(feature = "cli"))]
    fn confirm(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pio;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rangetool-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch directory");
        dir
    }

    #[test]
    fn converts_a_whole_tree() {
        let input = scratch("batch-in");
        let output = scratch("batch-out");
        std::fs::create_dir_all(input.join("100bb")).unwrap();
        std::fs::write(
            input.join("100bb/2.1.0.rng"),
            ["AA", "80;comment", "KK", "50;x;y"].join(pio::LINE_SEP),
        )
        .unwrap();
        Convert::new(input.clone(), output.clone(), false)
            .run()
            .expect("clean conversion");
        let written = output.join("100bb/pot/call/fold/r(100%)cf.txt");
        assert_eq!(
            std::fs::read_to_string(&written).expect("converted file"),
            ["AA:80,", "KK:50,"].join(pio::LINE_SEP)
        );
        std::fs::remove_dir_all(&input).unwrap();
        std::fs::remove_dir_all(&output).unwrap();
    }

    #[test]
    fn aborts_on_malformed_name() {
        let input = scratch("batch-bad-in");
        let output = scratch("batch-bad-out");
        std::fs::write(input.join("2.11.0.rng"), "AA\n80").unwrap();
        assert!(Convert::new(input.clone(), output.clone(), false)
            .run()
            .is_err());
        std::fs::remove_dir_all(&input).unwrap();
        std::fs::remove_dir_all(&output).unwrap();
    }
}
