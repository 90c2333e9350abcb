use async_trait::async_trait;
use tracing::debug;

use crate::customer::Customer;
use crate::errors::ServiceError;
use crate::storage::ordered_map_store::OrderedMapStore;
use crate::store::CustomerStore;

/// Customer store kept entirely in process memory, keyed by id.
#[derive(Default)]
pub struct InMemoryCustomerStore {
    store: OrderedMapStore<String, Customer>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self { store: OrderedMapStore::new() }
    }

    /// Build a store pre-populated with `customers`, in iteration order.
    /// Fails with `AlreadyExists` on the first repeated id.
    pub async fn with_customers<I>(customers: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = Customer>,
    {
        let store = Self::new();
        for customer in customers {
            store.add(customer).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, ServiceError> {
        self.store.list().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Customer, ServiceError> {
        self.store
            .get(&id.to_string())
            .await
            .ok_or_else(|| ServiceError::not_found(id))
    }

    async fn add(&self, customer: Customer) -> Result<String, ServiceError> {
        let id = customer.id.clone();
        if !self.store.insert_new(id.clone(), customer).await {
            return Err(ServiceError::already_exists(&id));
        }
        debug!(%id, "customer stored");
        Ok(id)
    }

    async fn remove(&self, id: &str) -> Result<String, ServiceError> {
        match self.store.remove(&id.to_string()).await? {
            Some(_) => {
                debug!(%id, "customer removed");
                Ok(id.to_string())
            }
            None => Err(ServiceError::not_found(id)),
        }
    }

    async fn len(&self) -> usize {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    async fn three_customers() -> InMemoryCustomerStore {
        InMemoryCustomerStore::with_customers([
            Customer::new("1", "John", "Smith"),
            Customer::new("2", "Sam", "Ford"),
            Customer::new("3", "Joseph", "Biden"),
        ])
        .await
        .expect("seed store")
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryCustomerStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn list_all_keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = InMemoryCustomerStore::new();
        let ids = ["9", "1", "5", "", "3"];
        for id in ids {
            store.add(Customer::new(id, format!("first-{id}"), format!("last-{id}"))).await?;
        }
        let listed: Vec<String> = store.list_all().await?.into_iter().map(|c| c.id).collect();
        assert_eq!(listed, ids);
        Ok(())
    }

    #[tokio::test]
    async fn add_returns_id_and_stores_record() -> Result<(), anyhow::Error> {
        let store = InMemoryCustomerStore::new();
        let id = store.add(Customer::new("1", "John", "Smith")).await?;
        assert_eq!(id, "1");
        assert_eq!(store.list_all().await?, vec![Customer::new("1", "John", "Smith")]);
        Ok(())
    }

    #[tokio::test]
    async fn add_with_existing_id_fails_and_keeps_original() -> Result<(), anyhow::Error> {
        let store = InMemoryCustomerStore::new();
        store.add(Customer::new("1", "John", "Smith")).await?;
        let before = store.list_all().await?;

        let err = store.add(Customer::new("1", "X", "Y")).await.unwrap_err();
        assert_eq!(err, ServiceError::AlreadyExists("1".into()));
        assert_eq!(store.list_all().await?, before);
        assert_eq!(store.get_by_id("1").await?, Customer::new("1", "John", "Smith"));
        Ok(())
    }

    #[tokio::test]
    async fn empty_id_is_a_regular_key() -> Result<(), anyhow::Error> {
        let store = InMemoryCustomerStore::new();
        assert_eq!(store.add(Customer::default()).await?, "");
        assert!(matches!(store.add(Customer::new("", "A", "B")).await, Err(ServiceError::AlreadyExists(_))));
        assert_eq!(store.get_by_id("").await?, Customer::default());
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_finds_record() -> Result<(), anyhow::Error> {
        let store = three_customers().await;
        assert_eq!(store.get_by_id("2").await?, Customer::new("2", "Sam", "Ford"));
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let store = three_customers().await;
        let err = store.get_by_id("99").await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("99".into()));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn add_then_get_round_trips() -> Result<(), anyhow::Error> {
        let store = three_customers().await;
        let c = Customer::new("4", "James", "Bond");
        let id = store.add(c.clone()).await?;
        assert_eq!(store.get_by_id(&id).await?, c);
        assert_eq!(store.len().await, 4);
        assert_eq!(store.list_all().await?[3], c);
        Ok(())
    }

    #[tokio::test]
    async fn remove_keeps_remaining_order() -> Result<(), anyhow::Error> {
        let store = three_customers().await;
        assert_eq!(store.remove("2").await?, "2");
        let listed: Vec<String> = store.list_all().await?.into_iter().map(|c| c.id).collect();
        assert_eq!(listed, ["1", "3"]);
        assert_eq!(store.len().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn remove_missing_is_not_found() {
        let store = three_customers().await;
        let before = store.list_all().await.unwrap();
        let err = store.remove("99").await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("99".into()));
        assert_eq!(store.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn seeding_with_duplicate_ids_fails() {
        let res = InMemoryCustomerStore::with_customers([
            Customer::new("1", "John", "Smith"),
            Customer::new("1", "Sam", "Ford"),
        ])
        .await;
        assert!(matches!(res, Err(ServiceError::AlreadyExists(id)) if id == "1"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_of_same_id_admit_one() {
        let store: Arc<dyn CustomerStore> = Arc::new(InMemoryCustomerStore::new());
        let mut handles = Vec::new();
        for n in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add(Customer::new("same", format!("n{n}"), "")).await
            }));
        }
        let mut ok = 0;
        for h in handles {
            if h.await.expect("task").is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.len().await, 1);
    }
}
