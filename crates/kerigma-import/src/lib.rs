//! Row coercion and the import run itself.
//!
//! Takes the lines and header bindings produced by `kerigma-ingest` and
//! turns each data line into a [`kerigma_model::PersonRecord`]: required
//! name, email placeholders, birth-date parsing, enum coercion with
//! Portuguese synonyms. Records go to a [`PersonStore`] one insert per
//! row, and every failure is reported against its line number.

pub mod dates;
pub mod email;
pub mod error;
pub mod pipeline;
pub mod row;
pub mod store;

pub use dates::{ISO_DATE, parse_birth_date};
pub use email::{GENERATED_EMAIL_NOTE, is_valid_email, placeholder_email};
pub use error::{ImportError, Result, RowError, StoreError};
pub use pipeline::{import_text, run_import};
pub use row::build_person;
pub use store::{JsonlStore, MemoryStore, PersonStore};
