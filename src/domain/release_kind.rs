use std::fmt;
use std::str::FromStr;

/// Semantic version bump category for the next release.
///
/// Variant order matters: `Major < Minor < Patch`, the same order as the
/// lowercase names compare as strings. The strongest bump across a set of
/// fragments is therefore the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseKind {
    Major,
    Minor,
    Patch,
}

impl ReleaseKind {
    /// Classify a single fragment file name.
    ///
    /// Checked in fixed order, first match wins:
    /// - contains `breaking` -> Major
    /// - contains `change` -> Minor
    /// - anything else -> Patch
    pub fn classify(name: &str) -> Self {
        if name.contains("breaking") {
            ReleaseKind::Major
        } else if name.contains("change") {
            ReleaseKind::Minor
        } else {
            ReleaseKind::Patch
        }
    }

    /// The strongest release kind implied by a set of fragment names.
    ///
    /// Returns `None` when there are no names.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| ReleaseKind::classify(name.as_ref()))
            .min()
    }

    /// Lowercase name as understood by the version tool
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseKind::Major => "major",
            ReleaseKind::Minor => "minor",
            ReleaseKind::Patch => "patch",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "major" => Ok(ReleaseKind::Major),
            "minor" => Ok(ReleaseKind::Minor),
            "patch" => Ok(ReleaseKind::Patch),
            other => Err(format!("unknown release kind: '{}'", other)),
        }
    }
}
