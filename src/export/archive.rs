use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::error::{ExportError, ExportResult};

const BEST_COMPRESSION: i32 = 9;

/// Zips `files` into `output`, every entry placed under a `<name>/` folder.
/// Compression runs on the blocking pool.
pub async fn create_archive(
    output: &Path,
    name: &str,
    files: Vec<PathBuf>,
) -> ExportResult<PathBuf> {
    let output = output.to_path_buf();
    let name = name.to_string();

    let archive =
        tokio::task::spawn_blocking(move || write_archive(&output, &name, &files).map(|_| output))
            .await??;

    log::debug!("Wrote archive {:?}", archive);

    Ok(archive)
}

fn write_archive(output: &Path, name: &str, files: &[PathBuf]) -> ExportResult<()> {
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(BEST_COMPRESSION));

    let mut zip = ZipWriter::new(BufWriter::new(File::create(output)?));

    for path in files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ExportError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unusable file name in archive input: {:?}", path),
                ))
            })?;

        zip.start_file(format!("{}/{}", name, file_name), options)?;
        io::copy(&mut File::open(path)?, &mut zip)?;
    }

    zip.finish()?.flush()?;

    Ok(())
}
