//! Storage abstractions for service layer
//!
//! In-memory containers shared by the stores; nothing here touches disk.

pub mod ordered_map_store;
