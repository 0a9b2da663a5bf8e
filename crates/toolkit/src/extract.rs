//! Archive extraction.
//!
//! Both formats unpack the whole archive into `dest`. Entries that would
//! escape `dest` (absolute paths, `..` components) are skipped by the
//! underlying readers.

use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tar::Archive;
use tracing::debug;
use zip::ZipArchive;

use crate::{Error, Result};

/// Unpack a gzip-compressed tarball into `dest`.
pub fn extract_tar(archive: &Path, dest: &Path) -> Result<()> {
    debug!(?archive, ?dest, "Extracting tar archive");
    std::fs::create_dir_all(dest)?;

    let file = File::open(archive)?;
    let mut tar = Archive::new(GzDecoder::new(file));
    tar.set_preserve_permissions(true);
    tar.unpack(dest)
        .map_err(|e| Error::extraction(archive, e.to_string()))?;

    Ok(())
}

/// Unpack a zip archive into `dest`.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    debug!(?archive, ?dest, "Extracting zip archive");
    std::fs::create_dir_all(dest)?;

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file).map_err(|e| Error::extraction(archive, e.to_string()))?;
    zip.extract(dest)
        .map_err(|e| Error::extraction(archive, e.to_string()))?;

    Ok(())
}
