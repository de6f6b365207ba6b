pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use session::{Session, SessionStore, USER_ID_KEY, USER_NAME_KEY};
