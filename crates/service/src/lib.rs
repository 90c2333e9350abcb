//! Service layer owning the customer collection.
//! - `customer` holds the record type exchanged over HTTP.
//! - `store` defines the `CustomerStore` contract and its in-memory implementation.
//! - `storage` contains the ordered key-value container the store is built on.

pub mod errors;
pub mod customer;
pub mod storage;
pub mod store;
pub mod seed;
