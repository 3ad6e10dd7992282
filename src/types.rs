use serde::{Deserialize, Serialize};
use std::fmt;

/// A reported code-quality issue at a specific source line of a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Violation identifier assigned by the server
    pub id: u64,
    /// The rule this violation breaches
    pub rule: Rule,
    /// Detailed message describing the problem
    pub message: String,
    /// The analyzed code unit the violation belongs to
    pub resource: Resource,
    /// Source line (1-indexed)
    pub line: u32,
}

/// The analysis rule definition that a violation breaches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// One sentence name of the problem
    pub name: String,
}

/// The analyzed code unit (file/class/module) a violation belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource key, e.g. a fully qualified class name
    pub key: String,
    /// Display name, e.g. `ComponentProfilerStubImpl`
    pub name: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} [{}]",
            self.resource.key, self.line, self.message, self.rule.name
        )
    }
}

/// Severity level filter for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
}

impl Priority {
    /// Wire form used in the `priorities` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blocker => "BLOCKER",
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
