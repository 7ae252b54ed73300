mod cli;
mod config;
mod error;
mod home;
mod install;
mod runner;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command, JavaOpts};
use config::{EnvOverrides, JavaConfig};
use runner::SystemRunner;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("winjdk=info".parse().unwrap()),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let env = EnvOverrides::from_env();

    match cli.command {
        Command::Install { java } => {
            install::install_jdk(&java_config(java), &env, &SystemRunner)?;
        }
        Command::JavaHome { java } => {
            let home = home::resolve_java_home(&java_config(java), &env);
            println!("{home}");
        }
    }

    Ok(())
}

fn java_config(opts: JavaOpts) -> JavaConfig {
    JavaConfig {
        version: opts.java_version,
        vendor: opts.vendor,
    }
}
