use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

fn default_height() -> u64 {
	640
}

fn default_width() -> u64 {
	512
}

fn default_bytes_per_pixel() -> u64 {
	2
}

fn default_image_count() -> u64 {
	32
}

/// Frame dimensions and count, shared across deployments. Every field has a default, so an
/// empty document is a valid configuration
#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CommonConfig {
	#[serde(default = "default_height")]
	pub height: u64,
	#[serde(default = "default_width")]
	pub width: u64,
	#[serde(default = "default_bytes_per_pixel")]
	pub bytes_per_pixel: u64,
	#[serde(default = "default_image_count")]
	pub image_count: u64,
}

impl Default for CommonConfig {
	fn default() -> Self {
		CommonConfig {
			height: default_height(),
			width: default_width(),
			bytes_per_pixel: default_bytes_per_pixel(),
			image_count: default_image_count(),
		}
	}
}

/// Deployment-specific configuration. `ParentDirectory` deliberately has no default - callers
/// must treat its absence as a hard configuration error
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TailoredConfig {
	#[serde(default)]
	pub parent_directory: Option<PathBuf>,
}

/// The resolved dimensions driving one run, derived once from a `CommonConfig` and immutable
/// thereafter
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
	pub height: u64,
	pub width: u64,
	pub bytes_per_pixel: u64,
	pub count: u64,
}

impl FrameSpec {
	/// Size of a single frame in bytes
	pub fn frame_size(&self) -> u64 {
		self.height * self.width * self.bytes_per_pixel
	}

	/// Total bytes across all frames of the run
	pub fn total_size(&self) -> u64 {
		self.frame_size() * self.count
	}

	pub fn validate(&self) -> Result<(), Error> {
		if self.frame_size() == 0 {
			return Err(Error::ConfigValidationError(format!("Frame size is zero ({} x {} x {} bytes per pixel) - Configure a nonzero Height, Width and BytesPerPixel", self.height, self.width, self.bytes_per_pixel)));
		}

		Ok(())
	}
}

impl From<&CommonConfig> for FrameSpec {
	fn from(config: &CommonConfig) -> Self {
		FrameSpec {
			height: config.height,
			width: config.width,
			bytes_per_pixel: config.bytes_per_pixel,
			count: config.image_count,
		}
	}
}

#[cfg(test)]
mod test {
    use super::{CommonConfig, FrameSpec, TailoredConfig};

	#[test]
	fn test_empty_document_resolves_to_defaults() {
		let config: CommonConfig = toml::from_str("").unwrap();

		assert_eq!(config, CommonConfig {
			height: 640,
			width: 512,
			bytes_per_pixel: 2,
			image_count: 32,
		});
	}

	#[test]
	fn test_configured_fields_override_defaults() {
		let config: CommonConfig = toml::from_str("Height = 4\nBytesPerPixel = 1").unwrap();

		assert_eq!(config, CommonConfig {
			height: 4,
			width: 512,
			bytes_per_pixel: 1,
			image_count: 32,
		});
	}

	#[test]
	fn test_parent_directory_is_optional_in_the_document() {
		let config: TailoredConfig = toml::from_str("").unwrap();
		assert_eq!(config.parent_directory, None);

		let config: TailoredConfig = toml::from_str("ParentDirectory = \"/tmp/frames\"").unwrap();
		assert_eq!(config.parent_directory, Some("/tmp/frames".into()));
	}

	#[test]
	fn test_frame_spec_sizes() {
		let spec = FrameSpec::from(&CommonConfig::default());

		assert_eq!(spec.frame_size(), 640 * 512 * 2);
		assert_eq!(spec.total_size(), 640 * 512 * 2 * 32);
	}

	#[test]
	fn test_zero_frame_size_fails_validation() {
		let spec = FrameSpec {
			height: 0,
			width: 512,
			bytes_per_pixel: 2,
			count: 32,
		};

		assert!(spec.validate().is_err());
	}
}
