use crate::ui::Message;
use snafu::prelude::*;
use std::{io, path::PathBuf, sync::mpsc::SendError};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(Err)))]
pub enum Error {
    #[snafu(display("Unable to parse config file: {source}"))]
    ConfigRead { source: toml::de::Error },

    #[snafu(display("Error accessing {}: {source}", path.display()))]
    Io { path: PathBuf, source: io::Error },

    #[snafu(display("Unable to find parent directory of {}", path.display()))]
    NoParent { path: PathBuf },

    #[snafu(display("The UI thread stopped listening"))]
    BrokenPipe { source: SendError<Message> },

    #[snafu(display("The UI thread panicked"))]
    UiPanicked,

    #[snafu(display("Unable to serialize report: {source}"))]
    Serialize { source: serde_json::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
