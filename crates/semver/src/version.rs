//! Semantic version value
//!
//! [`Version`] follows SemVer 2.0.0 precedence and plugs into the value
//! protocol as the `semver` opaque type: it renders as its canonical string,
//! compares against other versions, deep-copies, and exposes `major`, `minor`
//! and `patch` as readable and writable fields.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tessera_value::prelude::*;

/// Type name reported to the value layer
pub const TYPE_NAME: &str = "semver";

/// A single pre-release identifier
///
/// Numeric identifiers sort below alphanumeric ones; the variant order
/// encodes that rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreRelease {
    /// Identifier made of digits only, compared numerically
    Numeric(u64),
    /// Any other identifier, compared in ASCII order
    AlphaNumeric(String),
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// Semantic version
///
/// Build metadata is carried and rendered but takes no part in ordering or
/// equality.
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// Major version (breaking changes)
    pub major: u64,
    /// Minor version (backwards-compatible features)
    pub minor: u64,
    /// Patch version (backwards-compatible bug fixes)
    pub patch: u64,
    /// Pre-release identifiers (e.g. `alpha.1`)
    pub pre: Vec<PreRelease>,
    /// Build metadata identifiers
    pub build: Vec<String>,
}

impl Version {
    /// Create a release version without pre-release or build data
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version leniently.
    ///
    /// Accepts surrounding whitespace, a leading `v`, leading zeros in the
    /// numeric components and missing minor/patch components (which become
    /// 0). A shortened version may not carry pre-release or build data.
    pub fn parse_tolerant(input: &str) -> ValueResult<Self> {
        let trimmed = input.trim();
        let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if stripped.is_empty() {
            return Err(ValueError::parse(input, "version string is empty"));
        }

        let mut parts: Vec<String> = stripped
            .splitn(3, '.')
            .map(|part| {
                // Empty and single-character parts go to the strict parser as is
                if part.len() <= 1 {
                    return part.to_string();
                }
                let part = part.trim_start_matches('0');
                if part.starts_with(|c: char| c.is_ascii_digit()) {
                    part.to_string()
                } else {
                    format!("0{part}")
                }
            })
            .collect();

        if parts.len() < 3 {
            if parts.last().is_some_and(|last| last.contains(['+', '-'])) {
                return Err(ValueError::parse(
                    input,
                    "short version cannot contain pre-release or build metadata",
                ));
            }
            parts.resize(3, "0".to_string());
        }

        Self::parse(&parts.join(".")).map_err(|error| match error {
            ValueError::Parse { message, .. } => ValueError::parse(input, message),
            other => other,
        })
    }

    /// Parse a strict SemVer 2.0.0 version string
    pub fn parse(input: &str) -> ValueResult<Self> {
        let parsed =
            semver::Version::parse(input).map_err(|e| ValueError::parse(input, e.to_string()))?;

        let pre = if parsed.pre.is_empty() {
            Vec::new()
        } else {
            parsed
                .pre
                .as_str()
                .split('.')
                .map(|ident| parse_identifier(input, ident))
                .collect::<ValueResult<_>>()?
        };

        let build = if parsed.build.is_empty() {
            Vec::new()
        } else {
            parsed.build.as_str().split('.').map(str::to_string).collect()
        };

        Ok(Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre,
            build,
        })
    }

    /// Whether this version carries pre-release identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Mutable access to a numeric component by case-insensitive name
    fn component_mut(&mut self, name: &str) -> ValueResult<&mut u64> {
        match name.to_lowercase().as_str() {
            "major" => Ok(&mut self.major),
            "minor" => Ok(&mut self.minor),
            "patch" => Ok(&mut self.patch),
            _ => Err(ValueError::unknown_field(name)),
        }
    }
}

fn parse_identifier(input: &str, ident: &str) -> ValueResult<PreRelease> {
    if ident.bytes().all(|b| b.is_ascii_digit()) {
        ident
            .parse()
            .map(PreRelease::Numeric)
            .map_err(|_| ValueError::parse(input, format!("pre-release identifier {ident} is too large")))
    } else {
        Ok(PreRelease::AlphaNumeric(ident.to_string()))
    }
}

impl FromStr for Version {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tolerant(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, ident) in self.pre.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{ident}")?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // A release outranks any of its pre-releases
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_tolerant(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Value protocol
// ============================================================================

impl CustomStringCoalescer for Version {
    fn coalesce_to_string(&self, _: &dyn Coalescer) -> ValueResult<String> {
        Ok(self.to_string())
    }
}

impl Comparer for Version {
    fn compare(&self, other: &Value) -> ValueResult<Ordering> {
        match other.downcast_ref::<Version>() {
            Some(other) => Ok(self.cmp(other)),
            None => Err(ValueError::incompatible_types(TYPE_NAME, other.type_name())),
        }
    }
}

impl Copier for Version {
    fn deep_copy(&self) -> ValueResult<Value> {
        Ok(Value::opaque(self.clone()))
    }
}

impl ObjectReader for Version {
    fn get_object_key(&self, name: &str) -> ValueResult<Value> {
        let component = match name.to_lowercase().as_str() {
            "major" => self.major,
            "minor" => self.minor,
            "patch" => self.patch,
            _ => return Err(ValueError::unknown_field(name)),
        };
        i64::try_from(component)
            .map(Value::Integer)
            .map_err(|_| ValueError::coercion(format!("{name} version {component} does not fit an integer")))
    }
}

impl ObjectWriter for Version {
    fn set_object_key(&self, name: &str, value: Value) -> ValueResult<Value> {
        let mut updated = self.clone();
        let slot = updated.component_mut(name)?;
        *slot = match value {
            Value::Integer(n) if n >= 0 => n as u64,
            Value::Integer(_) => {
                return Err(ValueError::type_mismatch(
                    format!("non-negative integer for {} version", name.to_lowercase()),
                    "negative integer",
                ));
            }
            other => {
                return Err(ValueError::type_mismatch(
                    format!("integer for {} version", name.to_lowercase()),
                    other.type_name(),
                ));
            }
        };
        Ok(Value::opaque(updated))
    }
}

impl Opaque for Version {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_string_coalescer(&self) -> Option<&dyn CustomStringCoalescer> {
        Some(self)
    }

    fn as_comparer(&self) -> Option<&dyn Comparer> {
        Some(self)
    }

    fn as_copier(&self) -> Option<&dyn Copier> {
        Some(self)
    }

    fn as_object_reader(&self) -> Option<&dyn ObjectReader> {
        Some(self)
    }

    fn as_object_writer(&self) -> Option<&dyn ObjectWriter> {
        Some(self)
    }
}

impl From<Version> for Value {
    fn from(version: Version) -> Self {
        Value::opaque(version)
    }
}
