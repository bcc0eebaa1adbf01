use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use qshuf_cli::OutputFormat;
use qshuf_cli::QshufCli;
use qshuf_core::QshufError;
use qshuf_core::ShuffleOutcome;
use qshuf_core::shuffle_document;
use qshuf_core::shuffle_document_seeded;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = QshufCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose);

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics with help text and
		// error codes.
		match e.downcast::<QshufError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Route core logs (degenerate-block warnings) to stderr. `RUST_LOG`
/// overrides the default level; `-v` raises it to debug.
fn init_tracing(verbose: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(args: &QshufCli) -> Result<(), Box<dyn std::error::Error>> {
	let content = read_input(args)?;

	let outcome = match args.seed {
		Some(seed) => shuffle_document_seeded(&content, seed),
		None => {
			let mut rng = StdRng::from_entropy();
			shuffle_document(&content, &mut rng)
		}
	};

	report_diagnostics(&outcome, args.format);
	write_output(args, &outcome)?;

	Ok(())
}

fn read_input(args: &QshufCli) -> Result<String, QshufError> {
	match &args.input {
		Some(path) => std::fs::read_to_string(path).map_err(|source| QshufError::Read {
			path: path.display().to_string(),
			source,
		}),
		None => std::io::read_to_string(std::io::stdin()).map_err(|source| QshufError::Read {
			path: "<stdin>".to_string(),
			source,
		}),
	}
}

/// Write the shuffled document byte-exact: no extra trailing newline, so the
/// output contract survives the transport. A failed write leaves the input
/// file untouched for retry.
fn write_output(args: &QshufCli, outcome: &ShuffleOutcome) -> Result<(), QshufError> {
	match &args.output {
		Some(path) => {
			std::fs::write(path, &outcome.content).map_err(|source| QshufError::Write {
				path: path.display().to_string(),
				source,
			})?;
			println!("Shuffled {} block(s) into {}", outcome.blocks, path.display());
		}
		None => {
			print!("{}", outcome.content);
			if args.verbose {
				eprintln!("Shuffled {} block(s)", outcome.blocks);
			}
		}
	}

	Ok(())
}

/// Diagnostics always go to stderr; stdout stays reserved for the document.
/// They never change the exit code — a degenerate block is still shuffled.
fn report_diagnostics(outcome: &ShuffleOutcome, format: OutputFormat) {
	match format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"ok": outcome.diagnostics.is_empty(),
				"blocks": outcome.blocks,
				"diagnostics": outcome.diagnostics,
			});
			eprintln!("{output}");
		}
		OutputFormat::Github => {
			for diagnostic in &outcome.diagnostics {
				eprintln!("::warning ::{}", diagnostic.message());
			}
		}
		OutputFormat::Text => {
			for diagnostic in &outcome.diagnostics {
				eprintln!("{} {}", colored!("warning:", yellow), diagnostic.message());
			}
		}
	}
}
