#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("selection failed at prompt {prompt:?}")]
    SelectionFailed {
        prompt: String,
        #[source]
        source: SelectionFailure,
    },
    #[error("no file selected in {}", .dir.display())]
    NoFileSelected {
        dir: std::path::PathBuf,
        #[source]
        source: NoFileCause,
    },
    #[error("invalid selection {value:?} at prompt {prompt:?}")]
    InvalidSelection { prompt: String, value: String },
    #[error("failed to read {what} from standard input")]
    InputReadFailed {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid URL format {url:?}, must start with one of {prefixes:?}")]
    InvalidUrlFormat { url: String, prefixes: Vec<String> },
    #[error("{program} command failed")]
    ExecutionFailed {
        program: String,
        #[source]
        source: ExecutionFailure,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionFailure {
    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write candidates to the selector")]
    Write(#[source] std::io::Error),
    #[error("failed to wait for the selector")]
    Wait(#[source] std::io::Error),
    #[error("selector exited with {0}")]
    Aborted(std::process::ExitStatus),
    #[error("selector output is not UTF-8")]
    Unreadable(#[source] std::string::FromUtf8Error),
}

#[derive(Debug, thiserror::Error)]
pub enum NoFileCause {
    #[error("no media files found")]
    Empty,
    #[error("failed to list directory")]
    ListDir(#[source] std::io::Error),
    #[error(transparent)]
    Selection(SelectionFailure),
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutionFailure {
    #[error("failed to print the command")]
    Print(#[source] std::io::Error),
    #[error("failed to spawn")]
    Spawn(#[source] std::io::Error),
    #[error("exited with {0}")]
    Exit(std::process::ExitStatus),
}
