use async_trait::async_trait;

use crate::customer::Customer;
use crate::errors::ServiceError;

pub mod memory;

pub use memory::InMemoryCustomerStore;

/// Trait abstraction for customer storage.
/// Implementations own the collection and keep ids unique.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All stored customers in insertion order.
    /// Fails only with `Internal` when the store's own bookkeeping is inconsistent.
    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError>;
    /// The customer with the given id, or `NotFound`.
    async fn get_by_id(&self, id: &str) -> Result<Customer, ServiceError>;
    /// Store a customer whose id is not present yet and return that id.
    async fn add(&self, customer: Customer) -> Result<String, ServiceError>;
    /// Delete the customer with the given id and return that id.
    async fn remove(&self, id: &str) -> Result<String, ServiceError>;
    async fn len(&self) -> usize;
}
