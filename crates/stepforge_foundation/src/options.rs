//! Generation options.
//!
//! Both axes are closed enumerations parsed once at the API boundary.
//! Generators and formatters match on them instead of comparing strings.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, OptionAxis};

/// The syntax family a generated step declaration is wrapped in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutputTarget {
    /// `Given(/^text$/, async function () { ... });`
    Cucumber,
    /// `await test.step("Given text", async () => { ... });`
    #[cfg_attr(feature = "serde", serde(alias = "test-step"))]
    PlaywrightBdd,
    /// A plain commented block
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "plain"))]
    Generic,
}

impl OutputTarget {
    /// Canonical option name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cucumber => "cucumber",
            Self::PlaywrightBdd => "playwright-bdd",
            Self::Generic => "generic",
        }
    }
}

impl FromStr for OutputTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cucumber" | "cucumber-js" => Ok(Self::Cucumber),
            "playwright-bdd" | "test-step" => Ok(Self::PlaywrightBdd),
            "generic" | "plain" => Ok(Self::Generic),
            _ => Err(Error::unknown_option(OptionAxis::OutputTarget, s)),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The code idiom generators emit when they offer more than one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ExecutionTarget {
    /// Browser automation through a Playwright `page`
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "browser"))]
    Playwright,
    /// In-process component mount through Testing Library
    #[cfg_attr(feature = "serde", serde(alias = "component"))]
    ComponentMount,
}

impl ExecutionTarget {
    /// Canonical option name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playwright => "playwright",
            Self::ComponentMount => "component-mount",
        }
    }
}

impl FromStr for ExecutionTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playwright" | "browser" => Ok(Self::Playwright),
            "component-mount" | "component" | "testing-library" => Ok(Self::ComponentMount),
            _ => Err(Error::unknown_option(OptionAxis::ExecutionTarget, s)),
        }
    }
}

impl fmt::Display for ExecutionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options threaded through generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct GenerationOptions {
    /// Selects the formatter's wrapping syntax.
    pub output_target: OutputTarget,
    /// Selects the generator idiom.
    pub execution_target: ExecutionTarget,
}

impl GenerationOptions {
    /// Creates options with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the output target.
    #[must_use]
    pub fn with_output_target(mut self, target: OutputTarget) -> Self {
        self.output_target = target;
        self
    }

    /// Builder method to set the execution target.
    #[must_use]
    pub fn with_execution_target(mut self, target: ExecutionTarget) -> Self {
        self.execution_target = target;
        self
    }

    /// Parses both axes from their string names.
    ///
    /// `None` keeps the default for that axis.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::UnknownOption`] for unrecognized names.
    pub fn parse(output_target: Option<&str>, execution_target: Option<&str>) -> crate::Result<Self> {
        let mut options = Self::default();
        if let Some(name) = output_target {
            options.output_target = name.parse()?;
        }
        if let Some(name) = execution_target {
            options.execution_target = name.parse()?;
        }
        Ok(options)
    }
}
