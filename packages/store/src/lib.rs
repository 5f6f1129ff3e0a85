pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClientConfig;
pub use models::{Priority, SortKey, Status, Task, TaskFilter, User};
pub use session::{KeyValueStore, Session, SessionStore};
