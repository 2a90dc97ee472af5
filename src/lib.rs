pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Settings, DEFAULT_NAME};
pub use core::{engine::GreetEngine, greeter::greet, greeter::GREETING_PREFIX};
pub use domain::{model::Person, ports::NameProvider};
pub use utils::error::{GreeterError, Result};
