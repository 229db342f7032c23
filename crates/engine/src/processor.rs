use crate::error::{EngineError, Result};
use crate::filesystem::mirror_path;
use crate::stats::FileOutcome;
use crate::stripper::CommentStripper;
use std::fs;
use std::path::{Path, PathBuf};

/// Where changed files go.
#[derive(Debug, Clone)]
pub enum WriteTarget {
    InPlace,
    Mirror { root: PathBuf, output: PathBuf },
}

impl WriteTarget {
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        match self {
            Self::InPlace => Ok(path.to_path_buf()),
            Self::Mirror { root, output } => mirror_path(root, output, path),
        }
    }
}

/// Everything `process_file` needs that stays fixed for a run.
#[derive(Debug, Clone)]
pub struct ProcessContext {
    pub stripper: CommentStripper,
    pub target: WriteTarget,
    pub dry_run: bool,
}

/// Read, strip, and write back one file.
///
/// Files whose text is unchanged by stripping are never written.
///
/// # Errors
/// `FileRead` if the file cannot be read as UTF-8 text, `FileWrite` if the
/// result cannot be written.
pub fn process_file(path: &Path, ctx: &ProcessContext) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let cleaned = ctx.stripper.strip(&content);
    if cleaned == content {
        return Ok(FileOutcome::Unchanged);
    }

    let target = ctx.target.resolve(path)?;
    if ctx.dry_run {
        return Ok(FileOutcome::WouldChange { target });
    }

    write_text(&target, &cleaned)?;
    log::debug!(
        "{}: {} -> {} bytes",
        target.display(),
        content.len(),
        cleaned.len()
    );
    Ok(FileOutcome::Changed { written_to: target })
}

fn write_text(target: &Path, text: &str) -> Result<()> {
    let to_write_error = |source| EngineError::FileWrite {
        path: target.to_path_buf(),
        source,
    };
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(target, text).map_err(to_write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, tempdir};

    fn context(target: WriteTarget) -> ProcessContext {
        ProcessContext {
            stripper: CommentStripper::new().unwrap(),
            target,
            dry_run: false,
        }
    }

    #[test]
    fn rewrites_in_place() {
        let file = NamedTempFile::with_suffix(".cs").unwrap();
        fs::write(file.path(), "int a; // x\nint b; /* y */\n").unwrap();

        let outcome = process_file(file.path(), &context(WriteTarget::InPlace)).unwrap();

        assert_eq!(
            outcome,
            FileOutcome::Changed {
                written_to: file.path().to_path_buf()
            }
        );
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "int a; \nint b; \n"
        );
    }

    #[test]
    fn unchanged_file_is_not_mirrored() {
        let root = tempdir().unwrap();
        let out = tempdir().unwrap();
        let src = root.path().join("clean.cs");
        fs::write(&src, "int a = 1;\n").unwrap();

        let ctx = context(WriteTarget::Mirror {
            root: root.path().to_path_buf(),
            output: out.path().to_path_buf(),
        });
        assert_eq!(process_file(&src, &ctx).unwrap(), FileOutcome::Unchanged);
        assert!(!out.path().join("clean.cs").exists());
    }

    #[test]
    fn mirror_creates_parent_directories() {
        let root = tempdir().unwrap();
        let out = tempdir().unwrap();
        let src = root.path().join("sub/inner/F.cs");
        fs::create_dir_all(src.parent().unwrap()).unwrap();
        fs::write(&src, "/* header */\nclass F {}\n").unwrap();

        let ctx = context(WriteTarget::Mirror {
            root: root.path().to_path_buf(),
            output: out.path().to_path_buf(),
        });
        let outcome = process_file(&src, &ctx).unwrap();

        let expected = out.path().join("sub/inner/F.cs");
        assert_eq!(
            outcome,
            FileOutcome::Changed {
                written_to: expected.clone()
            }
        );
        assert_eq!(fs::read_to_string(expected).unwrap(), "\nclass F {}\n");
        // source untouched
        assert_eq!(
            fs::read_to_string(&src).unwrap(),
            "/* header */\nclass F {}\n"
        );
    }

    #[test]
    fn dry_run_writes_nothing() {
        let file = NamedTempFile::with_suffix(".cs").unwrap();
        fs::write(file.path(), "a(); // x").unwrap();

        let mut ctx = context(WriteTarget::InPlace);
        ctx.dry_run = true;
        let outcome = process_file(file.path(), &ctx).unwrap();

        assert!(matches!(outcome, FileOutcome::WouldChange { .. }));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "a(); // x");
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let file = NamedTempFile::with_suffix(".cs").unwrap();
        fs::write(file.path(), [0x2f, 0x2f, 0xff, 0xfe, 0x0a]).unwrap();

        let err = process_file(file.path(), &context(WriteTarget::InPlace)).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }
}
