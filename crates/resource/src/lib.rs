//! Image source providers.
//!
//! - [`FilesystemResourceProvider`]: relative paths under a base directory
//! - [`DataUrlResourceProvider`]: inline `data:` URLs, delegating everything else
//!
//! [`InMemoryResourceProvider`] is re-exported for convenience.

mod data_url;
mod filesystem;

pub use data_url::{DataUrlResourceProvider, decode_data_url};
pub use filesystem::FilesystemResourceProvider;
pub use folio_traits::InMemoryResourceProvider;
