use super::job::Job;
use crate::monker;
use anyhow::Context;
use std::path::Path;
use walkdir::WalkDir;

/// every Monker range file under the input root, in a stable depth-first
/// order, paired with its parent directory relative to the root
pub fn discover(input: &Path) -> anyhow::Result<Vec<Job>> {
    let mut jobs = vec![];
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk `{}`", input.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|ext| ext.to_str()) == Some(monker::SUFFIX)
        {
            let relative = entry
                .path()
                .parent()
                .unwrap_or(input)
                .strip_prefix(input)
                .with_context(|| format!("relativize `{}`", entry.path().display()))?
                .to_path_buf();
            jobs.push(Job::new(entry.path().to_path_buf(), relative));
        }
    }
    Ok(jobs)
}
