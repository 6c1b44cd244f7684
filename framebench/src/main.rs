mod args;

use std::{fs, io::Write, path::Path, process};

use args::Args;
use clap::{error::ErrorKind, Parser};
use libframebench::framebench::{config::{CommonConfig, FrameSpec, TailoredConfig}, FailurePolicy, FrameBench, RunOptions};
use log::{debug, error, info};

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Target architecture is not 64-bit - This software is only supported on 64-bit platforms");

const EXIT_USAGE: i32 = -1;
const EXIT_BAD_CONFIG: i32 = -2;
const EXIT_MISSING_COMMON_CONFIG: i32 = -3;
const EXIT_MISSING_TAILORED_CONFIG: i32 = -4;

fn main() {
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(e) => {
			let _ = e.print();
			match e.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return,
				_ => process::exit(EXIT_USAGE)
			}
		}
	};

	env_logger::Builder::new()
		.filter_level(args.verbose.log_level_filter())
		.format(|f, record| {
			let level_style = f.default_level_style(record.level());
			writeln!(f, "[{} {}/{}{}{}]: {}", f.timestamp(), record.target(), level_style.render(), record.level(), level_style.render_reset(), record.args())
		})
		.init();

	debug!("Args: {:?}", args);

	if !Path::new(&args.config).exists() {
		error!("Common configuration file \"{}\" does not exist", args.config);
		process::exit(EXIT_MISSING_COMMON_CONFIG);
	}

	if !Path::new(&args.tailored_config).exists() {
		error!("Tailored configuration file \"{}\" does not exist", args.tailored_config);
		process::exit(EXIT_MISSING_TAILORED_CONFIG);
	}

	info!("Parsing tailored configuration file: {}", args.tailored_config);

	let tailored: TailoredConfig = match fs::read_to_string(&args.tailored_config) {
		Ok(config_string) => match toml::from_str(&config_string) {
			Ok(config) => config,
			Err(e) => {
				error!("Error processing config file \"{}\": {}", args.tailored_config, e);
				process::exit(EXIT_BAD_CONFIG);
			}
		},
		Err(e) => {
			error!("Could not open config file \"{}\": {}", args.tailored_config, e);
			process::exit(EXIT_BAD_CONFIG);
		}
	};

	let directory = match tailored.parent_directory {
		Some(directory) => directory,
		None => {
			error!("No output directory specified in the tailored configuration file");
			process::exit(EXIT_BAD_CONFIG);
		}
	};

	if !directory.exists() {
		if let Err(e) = fs::create_dir_all(&directory) {
			error!("Could not create output directory \"{}\": {}", directory.display(), e);
			process::exit(1);
		}
	}

	info!("Parsing common configuration file: {}", args.config);

	let common: CommonConfig = match fs::read_to_string(&args.config) {
		Ok(config_string) => match toml::from_str(&config_string) {
			Ok(config) => config,
			Err(e) => {
				error!("Error processing config file \"{}\": {}", args.config, e);
				process::exit(EXIT_BAD_CONFIG);
			}
		},
		Err(e) => {
			error!("Could not open config file \"{}\": {}", args.config, e);
			process::exit(EXIT_BAD_CONFIG);
		}
	};

	debug!("Config: {:?}", common);

	let options = RunOptions {
		policy: if args.keep_going { FailurePolicy::KeepGoing } else { FailurePolicy::Abort },
		verify: args.verify,
		seed: args.seed,
	};

	let framebench = match FrameBench::new(FrameSpec::from(&common), directory, options) {
		Ok(framebench) => framebench,
		Err(e) => {
			error!("{}", e);
			process::exit(EXIT_BAD_CONFIG);
		}
	};

	match framebench.run() {
		Ok(report) => {
			if report.write_errors + report.read_errors + report.mismatches > 0 {
				error!("Run finished with {} write errors, {} read errors and {} mismatches", report.write_errors, report.read_errors, report.mismatches);
				process::exit(1);
			}

			info!("Finished: wrote and read back {} blobs", report.blobs_read);
		}
		Err(e) => {
			error!("Run failed: {}", e);
			process::exit(1);
		}
	}
}
