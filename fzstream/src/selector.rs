use crate::error::{Error, SelectionFailure};

/// Bridge to an external fuzzy finder (fzf by default).
///
/// The selector is spawned as `<program> <args...> --prompt=<label>`, fed one
/// candidate per line on stdin and its stdout is read back as the choice.
#[derive(Debug, Clone)]
pub struct Selector {
    program: String,
    args: Vec<String>,
}

impl Selector {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn from_config(config: &crate::SelectorConfig) -> Self {
        Self::new(config.program.as_str()).args(&config.args)
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Runs the selector once and returns the trimmed line it printed.
    pub async fn select<S>(&self, prompt: &str, candidates: &[S]) -> Result<String, SelectionFailure>
    where
        S: AsRef<str>,
    {
        use tokio::io::AsyncWriteExt as _;

        log::debug!(
            "{} {:?} --prompt={:?} ({} candidates)",
            self.program,
            self.args,
            prompt,
            candidates.len()
        );
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(format!("--prompt={}", prompt))
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .spawn()
            .map_err(|source| SelectionFailure::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        let mut lines = String::new();
        for candidate in candidates {
            lines.push_str(candidate.as_ref());
            lines.push('\n');
        }
        let writer = async move {
            let mut stdin = stdin.ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "selector stdin is not piped")
            })?;
            stdin.write_all(lines.as_bytes()).await?;
            stdin.shutdown().await?;
            // dropping stdin closes the pipe
            Ok::<(), std::io::Error>(())
        };

        let (written, output) = futures::future::join(writer, child.wait_with_output()).await;
        let output = output.map_err(SelectionFailure::Wait)?;
        if !output.status.success() {
            return Err(SelectionFailure::Aborted(output.status));
        }
        written.map_err(SelectionFailure::Write)?;

        let stdout = String::from_utf8(output.stdout).map_err(SelectionFailure::Unreadable)?;
        let choice = stdout.trim().to_owned();
        log::debug!("{:?} -> {:?}", prompt, choice);
        Ok(choice)
    }

    /// Like [`Selector::select`], but the result must be one of `options`.
    pub async fn choose<S>(&self, prompt: &str, options: &[S]) -> Result<String, Error>
    where
        S: AsRef<str>,
    {
        let choice = self
            .select(prompt, options)
            .await
            .map_err(|source| Error::SelectionFailed {
                prompt: prompt.to_owned(),
                source,
            })?;
        if options.iter().any(|option| option.as_ref() == choice) {
            Ok(choice)
        } else {
            log::warn!("{:?} is not one of the presented options", choice);
            Err(Error::InvalidSelection {
                prompt: prompt.to_owned(),
                value: choice,
            })
        }
    }
}
