// Loading and lookups must report through tracing, never stderr
#![deny(clippy::print_stderr)]

//! Semantic knowledge about systemd unit files.
//!
//! This crate knows which sections and keys a unit file may contain, where
//! each key is documented, and how each key's value is validated.
//!
//! # Architecture
//!
//! * [`sources`]: Where the raw tables come from (embedded, a directory, strings)
//! * [`gperf`]: Parser for the `load-fragment-gperf` validator table
//! * [`sections`]: Fixed metadata for the well-known section names
//! * [`validators`]: The closed set of value validators
//! * [`SemanticData`]: The registry tying all of the above together
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "embedded")]
//! # fn main() -> unitfile_semantic::Result<()> {
//! use unitfile_semantic::SemanticData;
//!
//! let data = SemanticData::load()?;
//! let validator = data.validator_for("Service", "Restart");
//! assert!(validator.validate("sometimes").is_some());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "embedded"))]
//! # fn main() {}
//! ```

pub mod error;
pub mod gperf;
mod registry;
pub mod sections;
pub mod sources;
pub mod validators;

pub use error::{Result, SemanticDataError};
pub use gperf::ValidatorTable;
pub use registry::{KeywordData, SemanticData};
pub use sections::KnownSection;
#[cfg(feature = "embedded")]
pub use sources::EmbeddedDocuments;
pub use sources::{DirectoryDocuments, DocumentStore, NoDocuments, SemanticSources};
pub use validators::OptionValidator;
