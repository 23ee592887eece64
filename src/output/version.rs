// SPDX-License-Identifier: GPL-2.0-only

//! Decode `git version` output.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::Serialize;

use crate::error::Error;

const VERSION_PREFIX: &str = "git version ";

/// The version string reported by `git version`, without the leading
/// `git version ` text.
///
/// ```
/// assert_eq!(
///     gitline::output::parse_version("git version 2.18.0.windows.1\n"),
///     "2.18.0.windows.1"
/// );
/// ```
pub fn parse_version(output: &str) -> &str {
    let output = output.trim_end();
    output.strip_prefix(VERSION_PREFIX).unwrap_or(output)
}

/// Ordered git version, e.g. for feature checks.
///
/// A release sorts after its own pre-releases: `3.0.0-rc0 < 3.0.0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GitVersion {
    pub major: u16,
    pub minor: u16,
    pub micro: u16,

    /// Pre-release suffix following `-`, such as `rc0`.
    pub extra: Option<String>,
}

impl GitVersion {
    pub fn new(major: u16, minor: u16, micro: u16) -> GitVersion {
        GitVersion {
            major,
            minor,
            micro,
            extra: None,
        }
    }
}

impl Ord for GitVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.micro)
            .cmp(&(other.major, other.minor, other.micro))
            .then_with(|| match (&self.extra, &other.extra) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for GitVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(extra) = &self.extra {
            write!(f, "-{extra}")?;
        }
        Ok(())
    }
}

impl FromStr for GitVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ver_str = s
            .trim_end()
            .strip_prefix(VERSION_PREFIX)
            .ok_or_else(|| Error::Version(s.trim_end().to_string()))?;

        // Vendor suffix, e.g. "(Apple Git-137.1)".
        if let Some((triplet, _vendor)) = ver_str.split_once(' ') {
            ver_str = triplet;
        }

        let (dotted, extra) = match ver_str.split_once('-') {
            Some((dotted, extra)) => (dotted, Some(extra.to_string())),
            None => (ver_str, None),
        };

        let mut components = dotted.splitn(4, '.');
        let mut component = |name: &str| {
            components
                .next()
                .and_then(|value| u16::from_str(value).ok())
                .ok_or_else(|| Error::Version(format!("bad {name} version in `{ver_str}`")))
        };

        let major = component("major")?;
        let minor = component("minor")?;
        let micro = component("micro")?;

        // A fourth component, as in pre-2.0 versions or "2.18.0.windows.1", is ignored.

        Ok(GitVersion {
            major,
            minor,
            micro,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string() {
        assert_eq!(parse_version("git version 2.18.0.windows.1"), "2.18.0.windows.1");
        assert_eq!(parse_version("git version 2.43.0\n"), "2.43.0");
        assert_eq!(parse_version("2.43.0"), "2.43.0");
    }

    #[test]
    fn parse_good_versions() {
        for (version, version_str) in [
            (GitVersion::new(2, 38, 1), "2.38.1"),
            (GitVersion::new(1, 8, 5), "1.8.5.6"),
            (GitVersion::new(2, 18, 0), "2.18.0.windows.1"),
            (
                GitVersion {
                    major: 2,
                    minor: 17,
                    micro: 123,
                    extra: Some("rc0".to_string()),
                },
                "2.17.123-rc0",
            ),
            (GitVersion::new(2, 37, 1), "2.37.1 (Apple Git-137.1)"),
        ] {
            let version_str = format!("git version {version_str}\n");
            assert_eq!(
                version,
                version_str
                    .parse::<GitVersion>()
                    .unwrap_or_else(|_| panic!("{}", version_str))
            );
        }
    }

    #[test]
    fn parse_bad_versions() {
        assert!("git version something".parse::<GitVersion>().is_err());
        assert!("git version 2.3-rc0".parse::<GitVersion>().is_err());
        assert!("2.38.1".parse::<GitVersion>().is_err());
    }

    #[test]
    fn version_comparisons() {
        let v2_38_1 = GitVersion::new(2, 38, 1);
        let v2_38_0 = GitVersion::new(2, 38, 0);
        let v2_3_15 = GitVersion::new(2, 3, 15);
        let v3_0_0_rc0: GitVersion = "git version 3.0.0-rc0".parse().unwrap();
        let v3_0_0_rc1: GitVersion = "git version 3.0.0-rc1".parse().unwrap();
        assert!(v2_38_1 > v2_38_0);
        assert!(v2_3_15 < v2_38_0);
        assert!(v3_0_0_rc0 > v2_38_1);
        assert!(v3_0_0_rc0 < v3_0_0_rc1);
        assert_eq!(v3_0_0_rc1.to_string(), "3.0.0-rc1");

        let v3_0_0 = GitVersion::new(3, 0, 0);
        assert!(v3_0_0 > v3_0_0_rc1);
        assert!(v3_0_0_rc0 < v3_0_0);
        assert!(GitVersion::new(3, 0, 1) > v3_0_0);
        let mut versions = vec![
            v3_0_0.clone(),
            v3_0_0_rc1.clone(),
            v2_38_1.clone(),
            v3_0_0_rc0.clone(),
        ];
        versions.sort();
        assert_eq!(versions, [v2_38_1, v3_0_0_rc0, v3_0_0_rc1, v3_0_0]);
    }
}
