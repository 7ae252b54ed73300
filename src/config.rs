use std::env;

/// Which JDK to provision: a version identifier and a vendor name.
#[derive(Debug, Clone)]
pub struct JavaConfig {
    pub version: String,
    pub vendor: String,
}

impl JavaConfig {
    /// Vendor match is a case-insensitive substring check, so
    /// "OpenJDK", "openjdk-hotspot" and "Eclipse OpenJDK" all count.
    pub fn is_openjdk(&self) -> bool {
        self.vendor.to_lowercase().contains("openjdk")
    }
}

/// Environment overrides, read once at startup and passed explicitly so the
/// install and resolve paths stay pure.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// `JDK_PACKAGE`: exact Chocolatey package name, wins over vendor naming.
    pub package: Option<String>,
    /// `CHOCOLATEY_INSTALL`: the literal "false" disables installation.
    pub install_toggle: Option<String>,
    /// `JAVA_HOME`: returned verbatim by the path resolver when set.
    pub java_home: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            package: non_empty_var("JDK_PACKAGE"),
            install_toggle: env::var("CHOCOLATEY_INSTALL").ok(),
            java_home: non_empty_var("JAVA_HOME"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openjdk_vendor_matches_case_insensitively() {
        for vendor in ["openjdk", "OpenJDK", "Eclipse OPENJDK"] {
            let cfg = JavaConfig {
                version: "17".into(),
                vendor: vendor.into(),
            };
            assert!(cfg.is_openjdk(), "vendor {vendor} should match");
        }
    }

    #[test]
    fn other_vendors_do_not_match() {
        let cfg = JavaConfig {
            version: "11".into(),
            vendor: "Oracle".into(),
        };
        assert!(!cfg.is_openjdk());
    }
}
