pub mod engine;
pub mod greeter;

pub use crate::domain::model::Person;
pub use crate::domain::ports::NameProvider;
pub use crate::utils::error::Result;
