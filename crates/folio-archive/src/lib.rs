//! Packaging for generated folio sites.
//!
//! Collects the emitted site, documentation, and decoded images into an
//! in-memory file map and writes it out as a zip archive or a directory.

pub mod archive;
pub mod images;
pub mod package;

pub use archive::{Archive, ArchiveError, Payload};
pub use images::{decode_data_uri, DecodeError};
pub use package::{archive_file_name, Package, PackageError, PackageOptions, Packager};
