use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "winjdk",
    version,
    about = "Install a JDK on Windows via Chocolatey and resolve JAVA_HOME"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install the configured JDK with Chocolatey
    Install {
        #[command(flatten)]
        java: JavaOpts,
    },
    /// Print the JAVA_HOME path for the configured JDK
    JavaHome {
        #[command(flatten)]
        java: JavaOpts,
    },
}

#[derive(Args)]
pub struct JavaOpts {
    /// JDK version identifier, e.g. 17
    #[arg(long, default_value = "17")]
    pub java_version: String,

    /// JDK vendor, e.g. openjdk or oracle
    #[arg(long, default_value = "openjdk")]
    pub vendor: String,
}
