use std::fs;
use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, info};

pub mod distribution;
pub mod error;
pub mod output;

pub use distribution::{generate, DistributionSpec, Kind, Sampler};
pub use error::{Result, SampleError};
pub use output::{output_path, write_samples};

pub const DEFAULT_SAMPLE_SIZE: usize = 100;
pub const DEFAULT_OUTPUT_DIR: &str = "data";

pub struct Options {
    pub sample_size: usize,
    pub output_dir: PathBuf,
    /// Create `output_dir` before writing if it does not exist.
    pub create_output_dir: bool,
    pub specs: Vec<DistributionSpec>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            create_output_dir: true,
            specs: DistributionSpec::defaults().to_vec(),
        }
    }
}

/// Generates and writes every configured sample set in order, stopping at the
/// first failure. Returns the paths written.
pub fn run<R: Rng + ?Sized>(options: &Options, rng: &mut R) -> Result<Vec<PathBuf>> {
    if options.create_output_dir {
        debug!(dir = %options.output_dir.display(), "ensuring output directory");
        fs::create_dir_all(&options.output_dir).map_err(|source| SampleError::CreateDir {
            path: options.output_dir.clone(),
            source,
        })?;
    }

    let mut written = Vec::with_capacity(options.specs.len());
    for spec in &options.specs {
        let values = generate(spec, options.sample_size, rng)?;
        let path = output_path(&options.output_dir, spec);
        write_samples(&path, &values)?;
        info!(
            distribution = spec.name,
            kind = %spec.kind,
            path = %path.display(),
            samples = values.len(),
            "wrote sample set"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod default_run {
    use std::fs;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use crate::{run, Options, SampleError};

    fn options_in(dir: &TempDir) -> Options {
        Options {
            output_dir: dir.path().join("data"),
            ..Options::default()
        }
    }

    fn read_lines(path: &std::path::Path) -> Vec<f64> {
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.ends_with('\n'), "{} not newline terminated", path.display());
        contents
            .lines()
            .map(|line| line.parse::<f64>().unwrap())
            .collect()
    }

    #[test]
    fn writes_three_files_of_100_lines() {
        let dir = TempDir::new().unwrap();
        let options = options_in(&dir);
        let written = run(&options, &mut StdRng::seed_from_u64(1)).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["normal.txt", "uniform.txt", "exponential.txt"]);

        let mut on_disk: Vec<_> = fs::read_dir(&options.output_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        on_disk.sort();
        assert_eq!(on_disk, ["exponential.txt", "normal.txt", "uniform.txt"]);

        for path in &written {
            assert_eq!(read_lines(path).len(), 100);
        }
        assert!(read_lines(&written[1]).iter().all(|v| (75.0..125.0).contains(v)));
        assert!(read_lines(&written[2]).iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn rerun_overwrites_instead_of_appending() {
        let dir = TempDir::new().unwrap();
        let options = options_in(&dir);
        let first = run(&options, &mut StdRng::seed_from_u64(1)).unwrap();
        let before = read_lines(&first[0]);
        let second = run(&options, &mut StdRng::seed_from_u64(2)).unwrap();
        let after = read_lines(&second[0]);
        assert_eq!(after.len(), 100);
        assert_ne!(before, after);
    }

    #[test]
    fn same_seed_same_files() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let written_a = run(&options_in(&a), &mut StdRng::seed_from_u64(5)).unwrap();
        let written_b = run(&options_in(&b), &mut StdRng::seed_from_u64(5)).unwrap();
        for (pa, pb) in written_a.iter().zip(&written_b) {
            assert_eq!(fs::read(pa).unwrap(), fs::read(pb).unwrap());
        }
    }

    #[test]
    fn sample_size_is_configurable() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            sample_size: 7,
            ..options_in(&dir)
        };
        for path in run(&options, &mut StdRng::seed_from_u64(3)).unwrap() {
            assert_eq!(read_lines(&path).len(), 7);
        }
    }

    #[test]
    fn missing_directory_fails_fast_without_creation() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            create_output_dir: false,
            ..options_in(&dir)
        };
        match run(&options, &mut StdRng::seed_from_u64(4)) {
            Err(SampleError::Write { path, .. }) => {
                assert_eq!(path, options.output_dir.join("normal.txt"));
            }
            other => panic!("expected write error, got {other:?}"),
        }
        assert!(!options.output_dir.exists());
    }

    #[test]
    fn invalid_spec_stops_before_later_files() {
        let dir = TempDir::new().unwrap();
        let options = Options {
            specs: vec![
                crate::DistributionSpec::normal(0.0, 1.0),
                crate::DistributionSpec::exponential(0.0, -1.0),
                crate::DistributionSpec::uniform(0.0, 1.0),
            ],
            ..options_in(&dir)
        };
        let err = run(&options, &mut StdRng::seed_from_u64(6)).unwrap_err();
        assert!(matches!(err, SampleError::InvalidParameter { parameter: "scale", .. }));
        assert!(options.output_dir.join("normal.txt").exists());
        assert!(!options.output_dir.join("uniform.txt").exists());
    }
}
