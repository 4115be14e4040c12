//! Downloading portraits to disk.
//!
//! - [`store`] owns the output directory and atomic writes
//! - [`batch`] runs the sequential fetch loop and builds the [`RunReport`]
//! - [`metadata`] turns roster entries into sidecar records

pub mod batch;
pub mod metadata;
pub mod store;

pub use batch::{fetch_one, run_batch, FailedDownload, FetchError, PortraitTarget, RunReport};
pub use metadata::{collect_metadata, MetadataRecord};
pub use store::{image_file_name, PortraitStore, StoreError};
