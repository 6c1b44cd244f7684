use clap::Parser;
use clap_verbosity_flag::InfoLevel;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	#[command(flatten)]
	pub verbose: clap_verbosity_flag::Verbosity<InfoLevel>,
	/// Path to the TOML document holding the frame dimensions and count
	pub config: String,
	/// Path to the TOML document holding the deployment-specific output directory
	pub tailored_config: String,
	/// Compare each read-back file against the bytes that were written. Retains all generated
	/// frames in memory for the duration of the run. Defaults to false
	#[arg(long)]
	pub verify: bool,
	/// Log and count I/O failures instead of stopping at the first one. Defaults to false
	#[arg(long)]
	pub keep_going: bool,
	/// Seed for the payload generator, for reproducible runs. Defaults to OS entropy
	#[arg(long)]
	pub seed: Option<u64>,
}
