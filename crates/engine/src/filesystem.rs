use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use ignore::{DirEntry, WalkBuilder, overrides::OverrideBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Checks that `root` is an existing directory and returns its canonical form.
///
/// # Errors
/// Returns `EngineError::Config` if the path does not exist or is not a directory.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    let canonical = root
        .canonicalize()
        .map_err(|_| EngineError::Config(format!("Directory not found: {}", root.display())))?;
    if !canonical.is_dir() {
        return Err(EngineError::Config(format!(
            "Not a directory: {}",
            root.display()
        )));
    }
    Ok(canonical)
}

/// Resolves the mirror output root, creating it unless `create` is false.
///
/// # Errors
/// Returns `EngineError::Config` if the directory cannot be created or resolved.
pub fn prepare_output_root(output: &Path, create: bool) -> Result<PathBuf> {
    if create {
        fs::create_dir_all(output).map_err(|e| {
            EngineError::Config(format!(
                "Cannot create output directory {}: {e}",
                output.display()
            ))
        })?;
    }
    if output.exists() {
        if !output.is_dir() {
            return Err(EngineError::Config(format!(
                "Output path is not a directory: {}",
                output.display()
            )));
        }
        return Ok(output.canonicalize()?);
    }
    Ok(std::path::absolute(output)?)
}

/// Maps `file` under `root` to the same relative location under `output_root`.
///
/// # Errors
/// Returns `EngineError::Config` if `file` is not inside `root`.
pub fn mirror_path(root: &Path, output_root: &Path, file: &Path) -> Result<PathBuf> {
    let relative = file.strip_prefix(root).map_err(|_| {
        EngineError::Config(format!(
            "{} is not inside {}",
            file.display(),
            root.display()
        ))
    })?;
    Ok(output_root.join(relative))
}

/// Recursive, sequential walk yielding files whose name ends with `suffix`.
///
/// Entries are visited in file-name order. `skip` prunes one directory from
/// the walk (the mirror output root when it sits inside `root`).
///
/// # Errors
/// Returns `EngineError::Config` if an exclude glob is invalid. Errors met
/// while walking are yielded per entry.
pub fn walk(
    root: &Path,
    options: &WalkOptions,
    suffix: &str,
    skip: Option<PathBuf>,
) -> Result<impl Iterator<Item = Result<PathBuf>> + use<>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .git_exclude(options.git_ignore)
        .parents(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    // Exclude patterns use the `!` prefix convention.
    if !options.exclude.is_empty() {
        let mut ov_builder = OverrideBuilder::new(root);
        for pattern in &options.exclude {
            ov_builder.add(&format!("!{pattern}")).map_err(|e| {
                EngineError::Config(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
        }
        let overrides = ov_builder
            .build()
            .map_err(|e| EngineError::Config(format!("Invalid exclude patterns: {e}")))?;
        builder.overrides(overrides);
    }

    if let Some(skip) = skip {
        builder.filter_entry(move |entry| {
            if entry.path() == skip {
                log::debug!("skipping output directory {}", skip.display());
                return false;
            }
            true
        });
    }

    let suffix = suffix.to_owned();
    Ok(builder.build().filter_map(move |entry| match entry {
        Ok(entry) => is_candidate(&entry, &suffix).then(|| Ok(entry.into_path())),
        Err(err) => Some(Err(EngineError::Walk(err))),
    }))
}

fn is_candidate(entry: &DirEntry, suffix: &str) -> bool {
    let is_file = entry.file_type().is_some_and(|ft| {
        ft.is_file() || (ft.is_symlink() && entry.path().is_file())
    });
    if !is_file {
        return false;
    }
    let matched = entry.file_name().to_string_lossy().ends_with(suffix);
    log::trace!(
        "{} {}",
        if matched { "match" } else { "skip" },
        entry.path().display()
    );
    matched
}
