pub mod config;

use std::{path::PathBuf, time::Instant};

use log::{error, info};

use crate::{blobio, bytefmt, error::Error, payload::PayloadSource};

use self::config::FrameSpec;

/// What to do when a blob write or read fails partway through a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailurePolicy {
	/// Stop at the first failed write or read
	Abort,
	/// Log and count the failure, then continue with the remaining blobs
	KeepGoing,
}

/// Knobs that alter how a run executes without changing the frame dimensions
#[derive(Debug)]
pub struct RunOptions {
	pub policy: FailurePolicy,
	/// Compare each read-back blob against the bytes that were written. Retains every generated
	/// blob in memory for the duration of the run
	pub verify: bool,
	/// Fixed payload engine seed; seeded from OS entropy when absent
	pub seed: Option<u64>,
}

impl Default for RunOptions {
	fn default() -> Self {
		RunOptions {
			policy: FailurePolicy::Abort,
			verify: false,
			seed: None,
		}
	}
}

/// Totals accumulated over one run. Error and mismatch counts can only be nonzero under
/// `FailurePolicy::KeepGoing`, since `FailurePolicy::Abort` turns the first failure into an
/// early return
#[derive(Debug, Default, PartialEq)]
pub struct RunReport {
	pub blobs_written: u64,
	pub blobs_read: u64,
	pub write_errors: u64,
	pub read_errors: u64,
	pub mismatches: u64,
}

/// The main mediator of the library, this struct drives the write pass and the read pass over
/// the configured set of blob files
pub struct FrameBench {
	spec: FrameSpec,
	directory: PathBuf,
	options: RunOptions,
}

impl FrameBench {
	/// Creates a new `FrameBench` over the specified frame spec and output directory,
	/// validating the spec and returning an error if it did not successfully validate
	pub fn new(spec: FrameSpec, directory: PathBuf, options: RunOptions) -> Result<Self, Error> {
		match spec.validate() {
			Ok(_) => Ok(FrameBench {
				spec,
				directory,
				options
			}),
			Err(e) => Err(e)
		}
	}

	/// Runs the write pass, then the read pass, strictly in that order, and returns the totals
	/// for both. The output directory must already exist. Under `FailurePolicy::Abort` the
	/// first I/O failure is returned as an error; under `FailurePolicy::KeepGoing` failures are
	/// logged and counted in the report instead
	pub fn run(&self) -> Result<RunReport, Error> {
		let frame_size = self.spec.frame_size();

		info!("Memory to be used: {}", bytefmt::format_bytes(self.spec.total_size()));

		let mut source = match self.options.seed {
			Some(seed) => PayloadSource::with_seed(seed),
			None => PayloadSource::new()
		};

		let mut report = RunReport::default();

		// Only populated when verifying - holds one generated blob per index
		let mut retained: Vec<Vec<u8>> = Vec::new();

		let write_start = Instant::now();

		for i in 0..self.spec.count {
			let path = blobio::blob_path(&self.directory, i);

			let mut data = vec![0u8; frame_size as usize];
			source.fill(&mut data);

			match blobio::write_blob(&path, &data) {
				Ok(_) => report.blobs_written += 1,
				Err(e) => match self.options.policy {
					FailurePolicy::Abort => return Err(e),
					FailurePolicy::KeepGoing => {
						error!("Failed to write blob \"{}\": {}", path.display(), e);
						report.write_errors += 1;
					}
				}
			}

			if self.options.verify {
				retained.push(data);
			}
		}

		Self::log_phase("Wrote", report.blobs_written, frame_size, write_start);

		let read_start = Instant::now();

		for i in 0..self.spec.count {
			let path = blobio::blob_path(&self.directory, i);

			match blobio::read_blob_exact(&path, frame_size) {
				Ok(data) => {
					report.blobs_read += 1;

					if self.options.verify && data != retained[i as usize] {
						error!("Blob \"{}\" does not match the bytes that were written", path.display());
						report.mismatches += 1;
					}
				}
				Err(e) => match self.options.policy {
					FailurePolicy::Abort => return Err(e),
					FailurePolicy::KeepGoing => {
						error!("Failed to read blob \"{}\": {}", path.display(), e);
						report.read_errors += 1;
					}
				}
			}
		}

		Self::log_phase("Read", report.blobs_read, frame_size, read_start);

		Ok(report)
	}

	fn log_phase(verb: &str, blobs: u64, frame_size: u64, start: Instant) {
		let secs_elapsed = start.elapsed().as_secs_f64();
		let throughput_mib = ((blobs * frame_size) as f64 / 1_048_576.0) / secs_elapsed;

		info!("{} {} blobs in {:.3} secs ({:.2} MiB/s)", verb, blobs, secs_elapsed, throughput_mib);
	}
}

#[cfg(test)]
mod test {
    use std::fs;

    use crate::utils::init_test_logger;

    use super::{config::FrameSpec, FailurePolicy, FrameBench, RunOptions};

	fn small_spec(count: u64) -> FrameSpec {
		FrameSpec {
			height: 4,
			width: 4,
			bytes_per_pixel: 2,
			count
		}
	}

	#[test]
	fn test_run_creates_expected_file_layout() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let framebench = FrameBench::new(small_spec(5), dir.path().to_path_buf(), RunOptions::default()).unwrap();

		let report = framebench.run().unwrap();

		assert_eq!(report.blobs_written, 5);
		assert_eq!(report.blobs_read, 5);
		assert_eq!(report.write_errors + report.read_errors + report.mismatches, 0);

		for i in 0..5 {
			let metadata = fs::metadata(dir.path().join(format!("shared_memory_test_{}", i))).unwrap();
			assert_eq!(metadata.len(), 4 * 4 * 2);
		}

		// Nothing else should have appeared in the output directory
		assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 5);
	}

	#[test]
	fn test_verified_run_finds_no_mismatches() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let options = RunOptions {
			verify: true,
			seed: Some(99),
			..Default::default()
		};
		let framebench = FrameBench::new(small_spec(8), dir.path().to_path_buf(), options).unwrap();

		let report = framebench.run().unwrap();

		assert_eq!(report.blobs_read, 8);
		assert_eq!(report.mismatches, 0);
	}

	#[test]
	fn test_missing_directory_aborts_on_first_error() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("no_such_dir");
		let framebench = FrameBench::new(small_spec(3), missing, RunOptions::default()).unwrap();

		assert!(framebench.run().is_err());
	}

	#[test]
	fn test_missing_directory_is_counted_when_keeping_going() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("no_such_dir");
		let options = RunOptions {
			policy: FailurePolicy::KeepGoing,
			..Default::default()
		};
		let framebench = FrameBench::new(small_spec(3), missing, options).unwrap();

		let report = framebench.run().unwrap();

		assert_eq!(report.blobs_written, 0);
		assert_eq!(report.write_errors, 3);
		assert_eq!(report.read_errors, 3);
	}

	#[test]
	fn test_zero_frame_size_is_rejected() {
		let spec = FrameSpec {
			height: 0,
			width: 512,
			bytes_per_pixel: 2,
			count: 1
		};

		assert!(FrameBench::new(spec, "/tmp".into(), RunOptions::default()).is_err());
	}

	#[test]
	fn test_zero_count_run_is_a_noop() {
		init_test_logger();

		let dir = tempfile::tempdir().unwrap();
		let framebench = FrameBench::new(small_spec(0), dir.path().to_path_buf(), RunOptions::default()).unwrap();

		let report = framebench.run().unwrap();

		assert_eq!(report, Default::default());
		assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
	}
}
