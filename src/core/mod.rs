// Core modules implementing the dataset model, storage, and error modeling.
pub mod catalog;
pub mod circulation;
pub mod error;
pub mod model;
pub mod store;
