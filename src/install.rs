use crate::config::{EnvOverrides, JavaConfig};
use crate::error::SetupError;
use crate::runner::CommandRunner;

/// Chocolatey package name for the configured JDK. A non-empty
/// `JDK_PACKAGE` override wins verbatim; otherwise OpenJDK vendors map to
/// `openjdk<version>` and everything else to `jdk<version>`.
pub fn package_name(cfg: &JavaConfig, env: &EnvOverrides) -> String {
    if let Some(pkg) = &env.package {
        return pkg.clone();
    }
    if cfg.is_openjdk() {
        format!("openjdk{}", cfg.version)
    } else {
        format!("jdk{}", cfg.version)
    }
}

/// Install the configured JDK with `choco install <pkg> -y`.
///
/// Setting `CHOCOLATEY_INSTALL=false` turns this into a no-op; any other
/// value, including unset, runs the install.
pub fn install_jdk(
    cfg: &JavaConfig,
    env: &EnvOverrides,
    runner: &dyn CommandRunner,
) -> Result<(), SetupError> {
    let pkg = package_name(cfg, env);

    if env.install_toggle.as_deref() == Some("false") {
        tracing::info!("Chocolatey install disabled, skipping JDK installation");
        return Ok(());
    }

    tracing::info!("installing JDK via Chocolatey: {pkg}");
    let output = runner.run("choco", &["install", &pkg, "-y"])?;

    if output.code != 0 {
        tracing::debug!("choco stderr: {}", output.stderr.trim());
        return Err(SetupError::InstallFailed { code: output.code });
    }

    tracing::info!("JDK installed successfully");
    Ok(())
}
