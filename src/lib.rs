#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod checker;
pub mod config;
pub mod extract;
pub mod models;
pub mod report;
pub mod scanning;

pub use checker::AssetChecker;
pub use config::CheckerConfig;
pub use models::{AssetFinding, FindingReason, LeadingSlashFinding, ReferenceKind, ScanReport};
