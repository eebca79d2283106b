use crate::monker;
use crate::pio;
use anyhow::bail;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// a well-formed Monker export: regular file, right suffix, and a stem made
/// of nothing but digits and dots
fn is_monker_range(path: &Path) -> bool {
    path.is_file()
        && path.extension().and_then(|ext| ext.to_str()) == Some(monker::SUFFIX)
        && path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map_or(false, |stem| {
                stem.chars().all(|c| c == '.' || c.is_ascii_digit())
            })
}

fn children(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut children = std::fs::read_dir(dir)
        .with_context(|| format!("read directory `{}`", dir.display()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<PathBuf>, std::io::Error>>()
        .with_context(|| format!("read directory `{}`", dir.display()))?;
    children.sort();
    Ok(children)
}

pub fn is_empty(dir: &Path) -> anyhow::Result<bool> {
    Ok(children(dir)?.is_empty())
}

/// every directory under the input root must hold either only
/// subdirectories or only well-formed `.rng` files
pub fn check_input(dir: &Path) -> anyhow::Result<()> {
    let children = children(dir)?;
    if children.iter().all(|child| !child.is_file()) {
        children.iter().try_for_each(|child| check_input(child))
    } else if let Some(stray) = children.iter().find(|child| !is_monker_range(child)) {
        bail!(
            "invalid Monker range directory `{}`: unexpected entry `{}`",
            dir.display(),
            stray.display()
        )
    } else {
        Ok(())
    }
}

/// the output root must exist and contain nothing but Pio range files, so a
/// wipe can never destroy anything else. a non-empty root additionally
/// requires the force flag.
pub fn check_output(dir: &Path, force: bool) -> anyhow::Result<()> {
    check_pio_tree(dir)?;
    if !force && !is_empty(dir)? {
        bail!(
            "output directory `{}` is not empty, pass --force to overwrite it",
            dir.display()
        );
    }
    Ok(())
}

fn check_pio_tree(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        bail!("`{}` is not a directory", dir.display());
    }
    for child in children(dir)? {
        if child.is_file() {
            if child.extension().and_then(|ext| ext.to_str()) != Some(pio::SUFFIX) {
                bail!(
                    "output directory holds non-range file `{}`",
                    child.display()
                );
            }
        } else {
            check_pio_tree(&child)?;
        }
    }
    Ok(())
}

/// wipe the output root and recreate it empty
pub fn clear(dir: &Path) -> anyhow::Result<()> {
    std::fs::remove_dir_all(dir).with_context(|| format!("remove `{}`", dir.display()))?;
    std::fs::create_dir(dir).with_context(|| format!("recreate `{}`", dir.display()))?;
    Ok(())
}
