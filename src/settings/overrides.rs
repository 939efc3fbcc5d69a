//! Typed option overrides and the map decoder that feeds them

use crate::settings::error::SettingsError;
use itertools::Itertools;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Every option name a caller may override
pub const RECOGNIZED_OPTIONS: [&str; 21] = [
    "nlive",
    "num_repeats",
    "do_clustering",
    "feedback",
    "precision_criterion",
    "max_ndead",
    "boost_posterior",
    "posteriors",
    "equals",
    "cluster_posteriors",
    "write_resume",
    "write_paramnames",
    "read_resume",
    "write_stats",
    "write_live",
    "write_dead",
    "update_files",
    "base_dir",
    "file_root",
    "grade_dims",
    "grade_frac",
];

/// Options whose values are text; `key=value` assignments keep these verbatim
pub const STRING_OPTIONS: [&str; 2] = ["base_dir", "file_root"];

/// Caller-supplied values; `None` means "use the default"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub nlive: Option<usize>,
    pub num_repeats: Option<usize>,
    pub do_clustering: Option<bool>,
    pub feedback: Option<u32>,
    pub precision_criterion: Option<f64>,
    pub max_ndead: Option<i64>,
    pub boost_posterior: Option<f64>,
    pub posteriors: Option<bool>,
    pub equals: Option<bool>,
    pub cluster_posteriors: Option<bool>,
    pub write_resume: Option<bool>,
    pub write_paramnames: Option<bool>,
    pub read_resume: Option<bool>,
    pub write_stats: Option<bool>,
    pub write_live: Option<bool>,
    pub write_dead: Option<bool>,
    pub update_files: Option<usize>,
    pub base_dir: Option<PathBuf>,
    pub file_root: Option<String>,
    pub grade_dims: Option<Vec<usize>>,
    pub grade_frac: Option<Vec<f64>>,
}

impl Overrides {
    /// Decode a keyword-style option map.
    ///
    /// All unknown keys are reported together, sorted, before any value is
    /// looked at.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, SettingsError> {
        let keys: Vec<String> = unrecognized_keys(&map);
        if !keys.is_empty() {
            return Err(SettingsError::UnrecognizedOption { keys });
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|source| SettingsError::InvalidOptionValue { source })
    }

    /// Layer `later` on top of `self`; any option set in `later` wins
    pub fn merge(self, later: Overrides) -> Overrides {
        Overrides {
            nlive: later.nlive.or(self.nlive),
            num_repeats: later.num_repeats.or(self.num_repeats),
            do_clustering: later.do_clustering.or(self.do_clustering),
            feedback: later.feedback.or(self.feedback),
            precision_criterion: later.precision_criterion.or(self.precision_criterion),
            max_ndead: later.max_ndead.or(self.max_ndead),
            boost_posterior: later.boost_posterior.or(self.boost_posterior),
            posteriors: later.posteriors.or(self.posteriors),
            equals: later.equals.or(self.equals),
            cluster_posteriors: later.cluster_posteriors.or(self.cluster_posteriors),
            write_resume: later.write_resume.or(self.write_resume),
            write_paramnames: later.write_paramnames.or(self.write_paramnames),
            read_resume: later.read_resume.or(self.read_resume),
            write_stats: later.write_stats.or(self.write_stats),
            write_live: later.write_live.or(self.write_live),
            write_dead: later.write_dead.or(self.write_dead),
            update_files: later.update_files.or(self.update_files),
            base_dir: later.base_dir.or(self.base_dir),
            file_root: later.file_root.or(self.file_root),
            grade_dims: later.grade_dims.or(self.grade_dims),
            grade_frac: later.grade_frac.or(self.grade_frac),
        }
    }
}

/// Keys of `map` outside the recognized option set, sorted
pub fn unrecognized_keys(map: &Map<String, Value>) -> Vec<String> {
    map.keys()
        .filter(|key| !RECOGNIZED_OPTIONS.contains(&key.as_str()))
        .cloned()
        .sorted()
        .collect()
}

/// Split a `key=value` pair from the command line.
///
/// Values of [`STRING_OPTIONS`] are always taken verbatim (`file_root=2024`).
/// Any other value is read as JSON when it parses (`500`, `false`, `[2,3]`),
/// otherwise it is kept as a bare string.
pub fn parse_assignment(input: &str) -> Result<(String, Value), SettingsError> {
    let malformed = || SettingsError::MalformedAssignment {
        input: input.to_string(),
    };

    let (key, raw) = input.split_once('=').ok_or_else(malformed)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(malformed());
    }

    let value = if STRING_OPTIONS.contains(&key) {
        Value::String(raw.to_string())
    } else {
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    };
    Ok((key.to_string(), value))
}
