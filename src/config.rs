//! Default values for the sampler settings

/// Live points per physical dimension when `nlive` is not supplied
pub const NLIVE_PER_DIM: usize = 25;

/// Slice-sampling repeats per physical dimension when `num_repeats` is not supplied
pub const REPEATS_PER_DIM: usize = 5;

pub const DEFAULT_DO_CLUSTERING: bool = true;

/// Command line verbosity of the engine, 0 (silent) to 3 (debug)
pub const DEFAULT_FEEDBACK: u32 = 1;

/// Fraction of the total evidence left in the live points at termination
pub const DEFAULT_PRECISION_CRITERION: f64 = 0.001;

/// Negative disables the iteration cap
pub const DEFAULT_MAX_NDEAD: i64 = -1;

pub const DEFAULT_BOOST_POSTERIOR: f64 = 0.0;

pub const DEFAULT_POSTERIORS: bool = true;
pub const DEFAULT_EQUALS: bool = true;
pub const DEFAULT_CLUSTER_POSTERIORS: bool = true;
pub const DEFAULT_WRITE_RESUME: bool = true;
pub const DEFAULT_WRITE_PARAMNAMES: bool = false;
pub const DEFAULT_READ_RESUME: bool = true;
pub const DEFAULT_WRITE_STATS: bool = true;
pub const DEFAULT_WRITE_LIVE: bool = true;
pub const DEFAULT_WRITE_DEAD: bool = true;

/// Output directory root
pub const DEFAULT_BASE_DIR: &str = "chains";

/// Stem of every file the engine writes
pub const DEFAULT_FILE_ROOT: &str = "test";

/// Time fraction given to each speed grade when `grade_frac` is not supplied
pub const DEFAULT_GRADE_FRAC: f64 = 1.0;

/// Subdirectory of the base directory holding per-cluster output
pub const CLUSTER_SUBDIR: &str = "clusters";

/// Highest feedback level the engine understands
pub const MAX_FEEDBACK: u32 = 3;
