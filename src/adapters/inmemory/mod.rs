pub mod customer_registry;
pub mod media_registry;

pub use customer_registry::CustomerRegistry;
pub use media_registry::MediaRegistry;
