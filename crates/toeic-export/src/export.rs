use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};
use vocab_types::VocabularyEntry;

pub const DEFAULT_INDENT: usize = 4;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode vocabulary: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Encode entries as a pretty-printed JSON array.
///
/// Non-ASCII text is written as literal UTF-8. There is no trailing newline.
pub fn render(entries: &[VocabularyEntry], indent: usize) -> Result<Vec<u8>, ExportError> {
    let pad = vec![b' '; indent];
    let mut out = Vec::with_capacity(entries.len() * 128);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
    entries.serialize(&mut ser)?;
    Ok(out)
}

/// Render entries and replace `path` with the result.
///
/// The bytes go to a temporary file next to `path` which is renamed over it
/// once fully written, so a failure never leaves a partial file behind and an
/// existing file is only replaced on success.
pub fn write_file(
    path: &Path,
    entries: &[VocabularyEntry],
    indent: usize,
) -> Result<(), ExportError> {
    let bytes = render(entries, indent)?;
    debug!("rendered {} bytes for {} entries", bytes.len(), entries.len());

    let write_err = |source: io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    ensure_writable(path).map_err(write_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    match_permissions(tmp.path(), path).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

// The rename only needs a writable directory, so an existing destination that
// may not be written must be rejected up front.
fn ensure_writable(dest: &Path) -> io::Result<()> {
    match fs::metadata(dest) {
        Ok(meta) if meta.is_file() => {
            if meta.permissions().readonly() {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "destination is read-only",
                ));
            }
            OpenOptions::new().write(true).open(dest).map(drop)
        }
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

// Temp files are created owner-only; keep what the replaced file had.
fn match_permissions(tmp: &Path, dest: &Path) -> io::Result<()> {
    match fs::metadata(dest) {
        Ok(meta) if meta.is_file() => fs::set_permissions(tmp, meta.permissions()),
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => default_permissions(tmp),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn default_permissions(tmp: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(tmp, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_tmp: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("agreement", "/ə'gri.mənt/", "một thỏa thuận chung"),
            VocabularyEntry::new("party", "/pa:rti/", "một người"),
        ]
    }

    #[test]
    fn renders_with_four_space_indent() {
        let text = String::from_utf8(render(&sample(), DEFAULT_INDENT).unwrap()).unwrap();
        let expected = concat!(
            "[\n",
            "    {\n",
            "        \"word\": \"agreement\",\n",
            "        \"pronounce\": \"/ə'gri.mənt/\",\n",
            "        \"meaning\": \"một thỏa thuận chung\"\n",
            "    },\n",
            "    {\n",
            "        \"word\": \"party\",\n",
            "        \"pronounce\": \"/pa:rti/\",\n",
            "        \"meaning\": \"một người\"\n",
            "    }\n",
            "]"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn keeps_non_ascii_literal() {
        let text = String::from_utf8(render(&sample(), 2).unwrap()).unwrap();
        assert!(text.contains("thỏa thuận"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  {\n    \"word\""));
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        let entries = vec![VocabularyEntry::new("say \"hi\"", "a\\b", "x")];
        let text = String::from_utf8(render(&entries, 4).unwrap()).unwrap();
        assert!(text.contains(r#""word": "say \"hi\"""#));
        assert!(text.contains(r#""pronounce": "a\\b""#));
    }

    #[test]
    fn empty_list_is_empty_array() {
        assert_eq!(render(&[], DEFAULT_INDENT).unwrap(), b"[]");
    }
}
