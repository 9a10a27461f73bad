pub mod change_listener;
pub mod customer_registry;
pub mod media_registry;

pub use change_listener::ChangeListener;
pub use customer_registry::CustomerRegistry;
pub use media_registry::MediaRegistry;
