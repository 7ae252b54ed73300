use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("JDK installation failed (exit code {code})")]
    InstallFailed { code: i32 },
}
