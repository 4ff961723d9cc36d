use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::distribution::DistributionSpec;
use crate::error::{Result, SampleError};

pub const OUTPUT_EXTENSION: &str = "txt";

/// `<dir>/<name>.txt`
pub fn output_path(dir: &Path, spec: &DistributionSpec) -> PathBuf {
    dir.join(format!("{}.{OUTPUT_EXTENSION}", spec.name))
}

/// Writes one value per line, truncating whatever was at `path`.
///
/// The parent directory must already exist. The file handle is dropped
/// before returning on every path, including errors.
pub fn write_samples<P: AsRef<Path>>(path: P, values: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source: io::Error| SampleError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    for value in values {
        writeln!(writer, "{value}").map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}
