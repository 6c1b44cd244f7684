use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniformly random blob payloads. One engine is seeded at construction and reused
/// for every blob in a run. Bytes are generated as unsigned `u8` - bit-identical on disk to a
/// signed-byte representation
pub struct PayloadSource {
	rng: StdRng,
}

impl PayloadSource {
	/// Creates a payload source seeded from OS entropy
	pub fn new() -> Self {
		PayloadSource {
			rng: StdRng::from_entropy()
		}
	}

	/// Creates a payload source with a fixed seed, for reproducible runs
	pub fn with_seed(seed: u64) -> Self {
		PayloadSource {
			rng: StdRng::seed_from_u64(seed)
		}
	}

	/// Fills `buf` with bytes drawn independently and uniformly from the full 8-bit range
	pub fn fill(&mut self, buf: &mut [u8]) {
		self.rng.fill(buf);
	}
}

impl Default for PayloadSource {
	fn default() -> Self {
		PayloadSource::new()
	}
}
