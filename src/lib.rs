//! Mela → Paprika recipe conversion
//!
//!     This crate converts recipe export files produced by Mela (one JSON document per
//!     recipe, loosely typed) into the import bundle Paprika consumes (a ZIP container
//!     holding one gzip-compressed JSON document per recipe).
//!
//! Architecture
//!
//!     - formats: one module per end of the pipeline. `mela` knows how to parse the
//!       input documents, `paprika` knows how to serialize the normalized records.
//!     - mappings: the coercion table between the two models. Mapping is total; any
//!       malformed or missing source field degrades to a safe default.
//!     - archive: bundle assembly, including entry naming and collision handling.
//!     - convert: the batch orchestrator tying the stages together.
//!
//!     This is a pure lib, that is, it powers the mela-paprika binary but is shell
//!     agnostic: no code here should suppose a shell environment, be it to std print,
//!     env vars, filesystem paths etc. Shells hand the engine (filename, bytes) pairs
//!     and get back archive bytes plus a per-file outcome report.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # FileError (per file) and ConvertError (batch fatal)
//!     ├── formats
//!     │   ├── mela
//!     │   │   ├── mod.rs          # Source model with loose-field unions
//!     │   │   └── parser.rs       # Document parsing
//!     │   └── paprika
//!     │       ├── mod.rs          # Normalized target model
//!     │       └── serializer.rs   # Gzipped JSON encoding
//!     ├── mappings
//!     │   └── mela_to_paprika.rs  # Field coercion table
//!     ├── archive.rs              # ZIP bundle builder
//!     ├── convert.rs              # Batch orchestrator
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     ├── conversion.rs           # End-to-end batches over fixture files
//!     ├── mapping_proptest.rs     # Order preservation and key totality properties
//!     ├── cli.rs                  # Binary-level tests
//!     └── fixtures
//!         ├── kitchensink.melarecipe
//!         ├── pasta.melarecipe
//!         └── ...
//!
//! Failure model
//!
//!     A single bad file never aborts conversion of the others. Parse and encode
//!     failures are captured into the outcome list per file; only invalid call
//!     arguments and container assembly failures surface as a hard error of the
//!     whole batch.
//!
//! Determinism
//!
//!     Converting byte-identical inputs in the same order yields a byte-identical
//!     bundle. The per-recipe gzip stream carries no timestamp, field order is fixed
//!     by the target struct, and the ZIP entries use constant timestamps. Paprika
//!     assigns its own recipe identity on import, so the bundle carries no generated
//!     uid that would break this.

pub mod archive;
pub mod convert;
pub mod error;
pub mod formats;
pub mod mappings;

pub use archive::ArchiveBuilder;
pub use convert::{convert_batch, BatchResult, InputFile, Outcome};
pub use error::{ConvertError, FileError};
