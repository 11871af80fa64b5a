//! Host blob sources

mod host_blob;

pub use host_blob::HostBlob;
