use crate::domain::Customer;
use crate::ports::customer_registry::CustomerRegistry as CustomerRegistryTrait;
use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory implementation of CustomerRegistry
///
/// Stands in for the real customer master data service.
/// Customers are registered through `add_customer`.
pub struct CustomerRegistry {
    customers: Mutex<HashSet<Customer>>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(HashSet::new()),
        }
    }

    /// Register a customer
    pub fn add_customer(&self, customer: Customer) {
        self.customers.lock().unwrap().insert(customer);
    }
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerRegistryTrait for CustomerRegistry {
    /// Check whether the customer has been registered
    fn contains_customer(&self, customer: &Customer) -> bool {
        self.customers.lock().unwrap().contains(customer)
    }
}
