use crate::config::{EnvOverrides, JavaConfig};

const OPENJDK_BASE: &str = r"C:\Program Files\OpenJDK";
const JAVA_BASE: &str = r"C:\Program Files\Java";

/// Resolve the `JAVA_HOME` directory for the configured JDK.
///
/// A set, non-empty `JAVA_HOME` in the environment is returned verbatim.
/// Otherwise the path follows vendor convention:
/// `C:\Program Files\OpenJDK\jdk-<version>` for OpenJDK vendors,
/// `C:\Program Files\Java\jdk-<version>` for everything else.
pub fn resolve_java_home(cfg: &JavaConfig, env: &EnvOverrides) -> String {
    if let Some(home) = &env.java_home {
        return home.clone();
    }

    let base = if cfg.is_openjdk() {
        OPENJDK_BASE
    } else {
        JAVA_BASE
    };

    let home = format!(r"{base}\jdk-{}", cfg.version);
    tracing::info!("setting JAVA_HOME to {home}");
    home
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(version: &str, vendor: &str) -> JavaConfig {
        JavaConfig {
            version: version.into(),
            vendor: vendor.into(),
        }
    }

    #[test]
    fn openjdk_vendor_uses_openjdk_base() {
        let home = resolve_java_home(&cfg("17", "OpenJDK"), &EnvOverrides::default());
        assert_eq!(home, r"C:\Program Files\OpenJDK\jdk-17");
    }

    #[test]
    fn other_vendor_uses_java_base() {
        let home = resolve_java_home(&cfg("11", "Oracle"), &EnvOverrides::default());
        assert_eq!(home, r"C:\Program Files\Java\jdk-11");
    }

    #[test]
    fn env_override_is_returned_verbatim() {
        let env = EnvOverrides {
            java_home: Some(r"D:\tools\jdk".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve_java_home(&cfg("17", "OpenJDK"), &env),
            r"D:\tools\jdk"
        );
        assert_eq!(resolve_java_home(&cfg("11", "Oracle"), &env), r"D:\tools\jdk");
    }
}
