pub mod pools;
pub mod selector;

pub use selector::{Reply, ResponseSelector};
