use derive_more::{Display, From};
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From, Display)]
pub enum Error {
	#[display("Response is not json (status {status}): {cause}")]
	ResponseFailedNotJson {
		status: StatusCode,
		body: String,
		cause: String,
	},

	#[display("Invalid multipart part '{name}': {cause}")]
	MultipartInvalidPart { name: String, cause: String },

	#[from]
	#[display("{_0}")]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
