mod aquarius;
mod config;
mod data_provider;
mod error;

pub use aquarius::{Aquarius, MetadataCache};
pub use config::{ServicesConfig, ServicesConfigRaw};
pub use data_provider::{DataServiceProvider, Encryptor, FileObject};
pub use error::{Result, ServiceError};
