use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum QshufError {
	#[error("failed to read input `{path}`: {source}")]
	#[diagnostic(
		code(qshuf::read),
		help("check that the file exists and contains valid UTF-8 text")
	)]
	Read {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write output `{path}`: {source}")]
	#[diagnostic(
		code(qshuf::write),
		help("check that the target directory exists and is writable")
	)]
	Write {
		path: String,
		#[source]
		source: std::io::Error,
	},
}

pub type QshufResult<T> = Result<T, QshufError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
