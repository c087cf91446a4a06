pub mod store;

pub use store::TodoStore;
