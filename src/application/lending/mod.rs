mod lending_service;
mod notifier;

pub use lending_service::LendingService;
pub use notifier::ChangeNotifier;
