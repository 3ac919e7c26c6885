use crate::command::CommandLine;
use crate::error::{Error, ExecutionFailure};

/// Prints `command` to `out`, then runs it with inherited stdout/stderr and
/// waits for it to exit.
pub async fn execute<W>(command: &CommandLine, out: &mut W) -> Result<(), Error>
where
    W: std::io::Write,
{
    let failed = |source| Error::ExecutionFailed {
        program: command.program.clone(),
        source,
    };

    writeln!(out, "Starting {} with command:", command.program)
        .and_then(|_| writeln!(out, "{}", command))
        .and_then(|_| out.flush())
        .map_err(|e| failed(ExecutionFailure::Print(e)))?;

    log::info!("spawning {}", command.program);
    let status = tokio::process::Command::new(&command.program)
        .args(&command.args)
        .stdin(std::process::Stdio::inherit())
        .stdout(std::process::Stdio::inherit())
        .stderr(std::process::Stdio::inherit())
        .status()
        .await
        .map_err(|e| failed(ExecutionFailure::Spawn(e)))?;
    if !status.success() {
        return Err(failed(ExecutionFailure::Exit(status)));
    }
    log::info!("{} exited with {}", command.program, status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::execute;
    use crate::command::CommandLine;
    use crate::error::{Error, ExecutionFailure};

    fn sh(script: &str) -> CommandLine {
        CommandLine {
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), script.to_owned()],
        }
    }

    #[tokio::test]
    async fn zero_exit_succeeds() {
        let mut out = Vec::new();
        execute(&sh("exit 0"), &mut out).await.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting sh with command:\nsh -c 'exit 0'\n"
        );
    }

    #[tokio::test]
    async fn non_zero_exit_fails() {
        let mut out = Vec::new();
        match execute(&sh("exit 3"), &mut out).await {
            Err(Error::ExecutionFailed {
                program,
                source: ExecutionFailure::Exit(status),
            }) => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_program_fails() {
        let command = CommandLine {
            program: "/nonexistent/fzstream-transcoder".to_owned(),
            args: Vec::new(),
        };
        let mut out = Vec::new();
        assert!(matches!(
            execute(&command, &mut out).await,
            Err(Error::ExecutionFailed {
                source: ExecutionFailure::Spawn(_),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn arguments_are_not_shell_interpreted() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");
        let command = CommandLine {
            program: "echo".to_owned(),
            args: vec![format!("rtmp://host/app; touch {}", marker.display())],
        };
        let mut out = Vec::new();
        execute(&command, &mut out).await.unwrap();
        assert!(!marker.exists());
    }
}
