use std::fs::DirBuilder;
use std::io;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Create `path` and any missing ancestors, `mkdir -p` style.
///
/// Every directory this call creates gets `mode` (subject to the process
/// umask; ignored on non-Unix targets). An existing directory at `path` is
/// success. Ancestors created before a failure are left in place.
pub fn mkdir_with_parents(path: &Utf8Path, mode: u32) -> Result<()> {
    mkdir_with(path, mode, &create_dir)
}

type CreateDir<'a> = dyn Fn(&Utf8Path, u32) -> io::Result<()> + 'a;

fn mkdir_with(path: &Utf8Path, mode: u32, create: &CreateDir<'_>) -> Result<()> {
    if path.as_str().is_empty() {
        bail!("cannot create a directory from an empty path");
    }

    let first_err = match create(path, mode) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    // Compare text, not components: `new/.` and `new` are distinct here.
    let parent = parent_dir(path);
    if parent.as_str() == path.as_str() {
        return Err(first_err).with_context(|| format!("creating directory {path}"));
    }

    mkdir_with(&parent, mode, create)?;
    create(path, mode).with_context(|| format!("creating directory {path}"))
}

/// Join segments with `/`, exactly as given.
///
/// No normalization happens: `["a/", "b"]` becomes `"a//b"`. Returns `None`
/// for an empty slice.
pub fn build_path<S: AsRef<str>>(segments: &[S]) -> Option<String> {
    let (first, rest) = segments.split_first()?;
    let len = segments.iter().map(|s| s.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(len);
    out.push_str(first.as_ref());
    for segment in rest {
        out.push('/');
        out.push_str(segment.as_ref());
    }
    Some(out)
}

/// Parent directory with `dirname(3)` semantics.
///
/// `"a/b"` -> `"a"`, `"a"` -> `"."`, `"/a"` -> `"/"`, `"/"` -> `"/"`.
/// Trailing separators are ignored.
pub fn parent_dir(path: &Utf8Path) -> Utf8PathBuf {
    let raw = path.as_str();
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return if raw.is_empty() { ".".into() } else { "/".into() };
    }

    match trimmed.rfind('/') {
        None => ".".into(),
        Some(idx) => {
            let head = trimmed[..idx].trim_end_matches('/');
            if head.is_empty() { "/".into() } else { head.into() }
        }
    }
}

/// Create a single directory. An existing directory counts as created.
fn create_dir(path: &Utf8Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    match builder.create(path) {
        Ok(()) => {
            debug!(%path, mode = format_args!("{mode:o}"), "created directory");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(())
            } else {
                Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{path} exists and is not a directory"),
                ))
            }
        }
        Err(err) => Err(err),
    }
}
