mod error;
mod store;

pub use error::RegistryError;
pub use store::TemplateRegistry;
