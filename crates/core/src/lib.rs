//! Core functionality for the nursery locator
//!
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//! - **Dataset**: nursery table loading with required-column checks
//! - **Boundary**: region outline loading
//! - **Reference point**: default, configured or manual location
//!
//! # Example
//!
//! ```rust,no_run
//! use nursery_core::{config::Config, dataset, reference::ReferencePoint};
//! use nursery_geo::locate_nearest;
//!
//! let config = Config::load(None).expect("config");
//! let nurseries = dataset::load_nurseries(&config.dataset_path()).expect("dataset");
//! let point = ReferencePoint::resolve(&config, None).expect("reference point");
//!
//! let nearest = locate_nearest(&nurseries, &point.coordinate, config.schema.distance.method)
//!     .expect("non-empty dataset");
//! println!("{} is {:.2} km away", nearest.item.name, nearest.distance_km);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod boundary;
pub mod config;
pub mod dataset;
pub mod error;
pub mod reference;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::boundary::load_boundary;
    pub use crate::config::Config;
    pub use crate::dataset::{load_nurseries, Nursery, REQUIRED_COLUMNS};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::reference::{PointSource, ReferencePoint};
}
