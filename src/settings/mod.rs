//! Sampler settings: default resolution and cross-field validation
//!
//! A [`Settings`] value is the full parameter bundle handed to the external
//! nested-sampling engine. It is only ever produced by [`SettingsBuilder`],
//! which resolves every option from the caller's overrides or from a default
//! scaled by the problem dimensionality, then checks that the speed grades
//! partition the dimensions.

pub mod error;
pub mod overrides;

pub use error::SettingsError;
pub use overrides::{parse_assignment, Overrides, RECOGNIZED_OPTIONS};

use crate::config;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Validated parameter bundle consumed by the sampling engine.
///
/// Fields are public so the engine driver can read them by name; treat the
/// value as immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Number of physical parameters
    #[serde(rename = "nDims")]
    pub n_dims: usize,

    /// Number of derived parameters
    #[serde(rename = "nDerived")]
    pub n_derived: usize,

    /// Number of live points
    pub nlive: usize,

    /// Slice-sampling steps used to generate a new point
    pub num_repeats: usize,

    /// Cluster-aware sampling
    pub do_clustering: bool,

    /// Engine verbosity, 0-3
    pub feedback: u32,

    /// Terminate once the live points hold this fraction of the evidence
    pub precision_criterion: f64,

    /// Hard iteration cap, negative disables it
    pub max_ndead: i64,

    /// Extra posterior samples, effectively capped at `num_repeats`
    pub boost_posterior: f64,

    pub posteriors: bool,
    pub equals: bool,
    pub cluster_posteriors: bool,
    pub write_resume: bool,
    pub write_paramnames: bool,
    pub read_resume: bool,
    pub write_stats: bool,
    pub write_live: bool,
    pub write_dead: bool,

    /// How many iterations between output refreshes
    pub update_files: usize,

    /// Output directory root
    pub base_dir: PathBuf,

    /// Output file stem
    pub file_root: String,

    /// Number of dimensions in each speed grade
    pub grade_dims: Vec<usize>,

    /// Time fraction spent in each speed grade
    pub grade_frac: Vec<f64>,
}

impl Settings {
    /// Build a bundle from typed overrides
    pub fn new(n_dims: usize, n_derived: usize, overrides: Overrides) -> Result<Self, SettingsError> {
        SettingsBuilder::new(n_dims, n_derived)
            .overrides(overrides)
            .build()
    }

    /// Build a bundle from a keyword-style option map
    pub fn from_map(
        n_dims: usize,
        n_derived: usize,
        options: Map<String, Value>,
    ) -> Result<Self, SettingsError> {
        SettingsBuilder::new(n_dims, n_derived)
            .apply_map(options)?
            .build()
    }

    /// Directory for per-cluster output, always `base_dir/clusters`
    pub fn cluster_dir(&self) -> PathBuf {
        self.base_dir.join(config::CLUSTER_SUBDIR)
    }

}

/// Collects overrides for a problem of known dimensionality and builds the
/// validated [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    n_dims: usize,
    n_derived: usize,
    overrides: Overrides,
}

impl SettingsBuilder {
    pub fn new(n_dims: usize, n_derived: usize) -> Self {
        Self {
            n_dims,
            n_derived,
            overrides: Overrides::default(),
        }
    }

    /// Layer a set of typed overrides on top of those already collected
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = self.overrides.merge(overrides);
        self
    }

    /// Decode and layer a keyword-style option map
    pub fn apply_map(self, options: Map<String, Value>) -> Result<Self, SettingsError> {
        let decoded = Overrides::from_map(options)?;
        Ok(self.overrides(decoded))
    }

    pub fn nlive(mut self, nlive: usize) -> Self {
        self.overrides.nlive = Some(nlive);
        self
    }

    pub fn num_repeats(mut self, num_repeats: usize) -> Self {
        self.overrides.num_repeats = Some(num_repeats);
        self
    }

    pub fn do_clustering(mut self, enabled: bool) -> Self {
        self.overrides.do_clustering = Some(enabled);
        self
    }

    pub fn feedback(mut self, level: u32) -> Self {
        self.overrides.feedback = Some(level);
        self
    }

    pub fn precision_criterion(mut self, criterion: f64) -> Self {
        self.overrides.precision_criterion = Some(criterion);
        self
    }

    pub fn max_ndead(mut self, max_ndead: i64) -> Self {
        self.overrides.max_ndead = Some(max_ndead);
        self
    }

    pub fn boost_posterior(mut self, boost: f64) -> Self {
        self.overrides.boost_posterior = Some(boost);
        self
    }

    pub fn posteriors(mut self, enabled: bool) -> Self {
        self.overrides.posteriors = Some(enabled);
        self
    }

    pub fn equals(mut self, enabled: bool) -> Self {
        self.overrides.equals = Some(enabled);
        self
    }

    pub fn cluster_posteriors(mut self, enabled: bool) -> Self {
        self.overrides.cluster_posteriors = Some(enabled);
        self
    }

    pub fn write_resume(mut self, enabled: bool) -> Self {
        self.overrides.write_resume = Some(enabled);
        self
    }

    pub fn write_paramnames(mut self, enabled: bool) -> Self {
        self.overrides.write_paramnames = Some(enabled);
        self
    }

    pub fn read_resume(mut self, enabled: bool) -> Self {
        self.overrides.read_resume = Some(enabled);
        self
    }

    pub fn write_stats(mut self, enabled: bool) -> Self {
        self.overrides.write_stats = Some(enabled);
        self
    }

    pub fn write_live(mut self, enabled: bool) -> Self {
        self.overrides.write_live = Some(enabled);
        self
    }

    pub fn write_dead(mut self, enabled: bool) -> Self {
        self.overrides.write_dead = Some(enabled);
        self
    }

    pub fn update_files(mut self, update_files: usize) -> Self {
        self.overrides.update_files = Some(update_files);
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.overrides.base_dir = Some(base_dir.into());
        self
    }

    pub fn file_root(mut self, file_root: impl Into<String>) -> Self {
        self.overrides.file_root = Some(file_root.into());
        self
    }

    pub fn grade_dims(mut self, grade_dims: Vec<usize>) -> Self {
        self.overrides.grade_dims = Some(grade_dims);
        self
    }

    pub fn grade_frac(mut self, grade_frac: Vec<f64>) -> Self {
        self.overrides.grade_frac = Some(grade_frac);
        self
    }

    /// Resolve defaults and validate the grade arrays.
    ///
    /// `update_files` defaults to the resolved `nlive` and `grade_frac`
    /// defaults to one entry per resolved grade, so both are resolved after
    /// the fields they read.
    pub fn build(self) -> Result<Settings, SettingsError> {
        let SettingsBuilder {
            n_dims,
            n_derived,
            overrides: o,
        } = self;

        let nlive = match o.nlive {
            Some(nlive) => nlive,
            None => scaled_default("nlive", n_dims, config::NLIVE_PER_DIM)?,
        };
        let num_repeats = match o.num_repeats {
            Some(num_repeats) => num_repeats,
            None => scaled_default("num_repeats", n_dims, config::REPEATS_PER_DIM)?,
        };
        let update_files = o.update_files.unwrap_or(nlive);
        let grade_dims = o.grade_dims.unwrap_or_else(|| vec![n_dims]);
        let grade_frac = o
            .grade_frac
            .unwrap_or_else(|| vec![config::DEFAULT_GRADE_FRAC; grade_dims.len()]);

        if grade_frac.len() != grade_dims.len() {
            return Err(SettingsError::MismatchedGradeArrays {
                dims: grade_dims.len(),
                fracs: grade_frac.len(),
            });
        }

        // u128 cannot overflow for any Vec<usize> that fits in memory
        let sum: u128 = grade_dims.iter().map(|&dims| dims as u128).sum();
        if sum != n_dims as u128 {
            return Err(SettingsError::InvalidGradeSum { sum, n_dims });
        }

        let settings = Settings {
            n_dims,
            n_derived,
            nlive,
            num_repeats,
            do_clustering: o.do_clustering.unwrap_or(config::DEFAULT_DO_CLUSTERING),
            feedback: o.feedback.unwrap_or(config::DEFAULT_FEEDBACK),
            precision_criterion: o
                .precision_criterion
                .unwrap_or(config::DEFAULT_PRECISION_CRITERION),
            max_ndead: o.max_ndead.unwrap_or(config::DEFAULT_MAX_NDEAD),
            boost_posterior: o.boost_posterior.unwrap_or(config::DEFAULT_BOOST_POSTERIOR),
            posteriors: o.posteriors.unwrap_or(config::DEFAULT_POSTERIORS),
            equals: o.equals.unwrap_or(config::DEFAULT_EQUALS),
            cluster_posteriors: o
                .cluster_posteriors
                .unwrap_or(config::DEFAULT_CLUSTER_POSTERIORS),
            write_resume: o.write_resume.unwrap_or(config::DEFAULT_WRITE_RESUME),
            write_paramnames: o.write_paramnames.unwrap_or(config::DEFAULT_WRITE_PARAMNAMES),
            read_resume: o.read_resume.unwrap_or(config::DEFAULT_READ_RESUME),
            write_stats: o.write_stats.unwrap_or(config::DEFAULT_WRITE_STATS),
            write_live: o.write_live.unwrap_or(config::DEFAULT_WRITE_LIVE),
            write_dead: o.write_dead.unwrap_or(config::DEFAULT_WRITE_DEAD),
            update_files,
            base_dir: o
                .base_dir
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_BASE_DIR)),
            file_root: o
                .file_root
                .unwrap_or_else(|| config::DEFAULT_FILE_ROOT.to_string()),
            grade_dims,
            grade_frac,
        };

        warn_on_suspicious_values(&settings);
        log::debug!(
            "Resolved settings for {} dims ({} derived): nlive={}, num_repeats={}, grades={:?}",
            settings.n_dims,
            settings.n_derived,
            settings.nlive,
            settings.num_repeats,
            settings.grade_dims
        );

        Ok(settings)
    }
}

fn scaled_default(option: &'static str, n_dims: usize, per_dim: usize) -> Result<usize, SettingsError> {
    n_dims
        .checked_mul(per_dim)
        .ok_or(SettingsError::DefaultOverflow { option, n_dims })
}

/// Values the engine accepts but that are probably mistakes
fn warn_on_suspicious_values(settings: &Settings) {
    if settings.feedback > config::MAX_FEEDBACK {
        log::warn!(
            "feedback={} is above the highest level ({})",
            settings.feedback,
            config::MAX_FEEDBACK
        );
    }

    if settings.boost_posterior > settings.num_repeats as f64 {
        log::warn!(
            "boost_posterior={} cannot exceed num_repeats={} in effect",
            settings.boost_posterior,
            settings.num_repeats
        );
    }

    if !settings.do_clustering && settings.cluster_posteriors {
        log::debug!("cluster_posteriors has no effect with clustering disabled");
    }
}
