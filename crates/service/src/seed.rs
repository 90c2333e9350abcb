use crate::customer::Customer;

/// Records loaded at startup when `seed.sample_customers` is enabled.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("1", "John", "Smith"),
        Customer::new("2", "Sam", "Ford"),
    ]
}
