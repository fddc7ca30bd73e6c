use crate::utils::Result;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn create_writer<T, F>(output_prefix: &str, output_suffix: &str, f: F) -> Result<T>
where
    F: FnOnce(&str) -> Result<T>,
{
    let output_path = format!("{}.{}", output_prefix, output_suffix);
    f(&output_path)
}

/// Writes `path` through a temporary file in the same directory.
///
/// The destination only appears (or is replaced) after `f` and the final
/// flush both succeeded.
pub fn write_atomically<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp_file = NamedTempFile::new_in(dir)
        .map_err(|e| format!("Failed to create temporary file in {}: {}", dir.display(), e))?;

    let mut writer = BufWriter::new(temp_file);
    f(&mut writer).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    let temp_file = writer
        .into_inner()
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e.error()))?;

    temp_file
        .persist(path)
        .map_err(|e| format!("Failed to persist {}: {}", path.display(), e))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn create_writer_joins_prefix_and_suffix() {
        let path = create_writer("out/run", "clean.txt", |p| Ok(p.to_string())).unwrap();
        assert_eq!(path, "out/run.clean.txt");
    }

    #[test]
    fn write_atomically_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.txt");
        write_atomically(&path, |w| writeln!(w, "ACGT")).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ACGT\n");
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.txt");
        let result = write_atomically(&path, |w| {
            writeln!(w, "ACGT")?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });
        assert!(result.is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn failed_write_keeps_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.txt");
        std::fs::write(&path, "OLD\n").unwrap();
        let result = write_atomically(&path, |_| Err(io::Error::new(io::ErrorKind::Other, "boom")));
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "OLD\n");
    }
}
