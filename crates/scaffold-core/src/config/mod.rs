//! Configuration files written into the generated project

pub mod manifest;
pub mod pin;

pub use manifest::{PackageManifest, MANIFEST_FILE};
pub use pin::{parse_runtime_version, write_pin_file, PIN_FILE};
