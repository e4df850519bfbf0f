use image::error::ImageError;

use ptree_img::PartitionTree;

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Output path used when none is given: the input path with its file
/// extension (if any) replaced by `.ptree.png`.
fn default_output_path(input_path: &str) -> PathBuf {
	Path::new(input_path).with_extension("ptree.png")
}

/// `clap`-based CLI for compressing and mirroring images with a partition tree.
///
/// Log output goes to stderr and is filtered by `RUST_LOG` (default `info`).
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let clap_matches = clap::App::new("ptree_img")
		.version("0.1.0")
		.author("vkcz")
		.about("Renders an image through a binary partition tree, optionally pruned and mirrored.")
		.arg_from_usage("-t, --tolerance=[N] 'Prune subtrees whose pixels are all within N of their average color'")
		.arg_from_usage("-x, --flip-horizontal 'Mirror the output left to right'")
		.arg_from_usage("-y, --flip-vertical 'Mirror the output top to bottom'")
		.arg_from_usage("-s, --stats 'Print node and leaf counts'")
		.arg_from_usage("<INPUT> 'Path to input file'")
		.arg_from_usage("[OUTPUT] 'Path to output file; defaults to INPUT with a .ptree.png extension'")
		.get_matches();

	let input_path = clap_matches.value_of("INPUT").unwrap_or_else(|| error_exit("Missing input path", 2));
	let tolerance = clap_matches.value_of("tolerance").map(|t| match t.parse::<f64>() {
		Ok(n) if n >= 0. => n,
		_ => error_exit("Tolerance must be a non-negative number", 2)
	});

	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgba8();

	let mut tree = match PartitionTree::from_rgba(&source) {
		Ok(t) => t,
		Err(e) => error_exit(&e.to_string(), 4)
	};
	info!(width = source.width(), height = source.height(), nodes = tree.size(), "built tree");

	if let Some(tolerance) = tolerance {
		tree.prune(tolerance);
		info!(tolerance, nodes = tree.size(), leaves = tree.num_leaves(), "pruned tree");
	}
	if clap_matches.is_present("flip-horizontal") {
		tree.flip_horizontal();
	}
	if clap_matches.is_present("flip-vertical") {
		tree.flip_vertical();
	}
	if clap_matches.is_present("stats") {
		println!("nodes: {}", tree.size());
		println!("leaves: {}", tree.num_leaves());
	}

	let output_path = clap_matches.value_of("OUTPUT").map(PathBuf::from)
		.unwrap_or_else(|| default_output_path(input_path));
	match tree.render_rgba().save(&output_path) {
		Ok(_) => info!(path = %output_path.display(), "saved output"),
		Err(_) => error_exit("Could not save output", 3)
	}
}
