//! One performance-test run's full set of component series
//!
//! A suite is read-only once built and derives two suite-level scores on
//! demand:
//!
//! - [`old_average`](TestSuite::old_average), the legacy estimate, strips
//!   the presumed-outlier maximum: per-component strip-max medians in
//!   multi-series mode, then a strip-max mean across the medians.
//! - [`new_average`](TestSuite::new_average), the refined estimate, strips
//!   the warm-up first run per component instead and applies no further
//!   stripping across components.
//!
//! The legacy score strips twice in multi-series mode, the refined score
//! once; the asymmetry is part of the scoring contract.

use crate::component::TestComponent;
use indexmap::IndexMap;
use perfsift_core::{aggregate, Error, Estimate, Result, Strip};

/// Whether a suite reports one undifferentiated measurement stream ("ts")
/// or several named components ("tp").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteFormat {
    SingleSeries,
    MultiSeries,
}

impl SuiteFormat {
    /// The wire tag for this format.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SingleSeries => "ts",
            Self::MultiSeries => "tp",
        }
    }

    /// Parse a wire tag, accepting the bare and `_format`-suffixed forms.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "ts" | "ts_format" => Ok(Self::SingleSeries),
            "tp" | "tp_format" => Ok(Self::MultiSeries),
            other => Err(Error::InvalidInput(format!(
                "unrecognized suite format {other:?}"
            ))),
        }
    }
}

/// A named collection of test components from one performance-test run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSuite {
    format: SuiteFormat,
    components: IndexMap<String, TestComponent>,
}

impl TestSuite {
    /// Build a suite from already-parsed components. Component names must
    /// be unique.
    pub fn from_components<I>(format: SuiteFormat, components: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, TestComponent)>,
    {
        let mut map = IndexMap::new();
        for (name, component) in components {
            if map.insert(name.clone(), component).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate component {name:?}"
                )));
            }
        }
        Ok(Self {
            format,
            components: map,
        })
    }

    /// Build a suite from raw comma-separated series strings, as they
    /// appear in testrun documents. Any non-numeric token fails the whole
    /// suite.
    pub fn parse<I, K, V>(format: SuiteFormat, series: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut map = IndexMap::new();
        for (name, runs) in series {
            let name = name.into();
            let component = TestComponent::parse(runs.as_ref()).map_err(|e| {
                Error::InvalidInput(format!("component {name:?}: {e}"))
            })?;
            if map.insert(name.clone(), component).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate component {name:?}"
                )));
            }
        }
        Ok(Self {
            format,
            components: map,
        })
    }

    pub fn format(&self) -> SuiteFormat {
        self.format
    }

    /// The components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &TestComponent)> {
        self.components.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The one component of a single-series suite. A single-series suite
    /// holding anything other than exactly one component is malformed.
    fn single(&self) -> Result<&TestComponent> {
        if self.components.len() != 1 {
            return Err(Error::InvalidInput(format!(
                "single-series suite holds {} components",
                self.components.len()
            )));
        }
        Ok(&self.components[0])
    }

    /// Per-component medians under the given strip policy, in component
    /// order.
    fn component_medians(&self, strip: Strip) -> Result<Vec<f64>> {
        self.components
            .values()
            .map(|c| aggregate::median(c.values(), strip))
            .collect()
    }

    /// Legacy suite score: strip-max mean of the one series (single-series)
    /// or strip-max mean over per-component strip-max medians
    /// (multi-series).
    pub fn old_average(&self) -> Result<Estimate> {
        match self.format {
            SuiteFormat::SingleSeries => {
                aggregate::mean_stddev(self.single()?.values(), Strip::MAX)
            }
            SuiteFormat::MultiSeries => {
                let medians = self.component_medians(Strip::MAX)?;
                aggregate::mean_stddev(&medians, Strip::MAX)
            }
        }
    }

    /// Refined suite score: plain mean of the one series (single-series) or
    /// plain mean over per-component strip-first medians (multi-series).
    pub fn new_average(&self) -> Result<Estimate> {
        match self.format {
            SuiteFormat::SingleSeries => {
                aggregate::mean_stddev(self.single()?.values(), Strip::NONE)
            }
            SuiteFormat::MultiSeries => {
                let medians = self.component_medians(Strip::FIRST)?;
                aggregate::mean_stddev(&medians, Strip::NONE)
            }
        }
    }
}
