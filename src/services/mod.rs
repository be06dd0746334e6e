pub mod session_store;
pub mod storage_service;
pub mod scheduler;
pub mod scroll;

pub use session_store::{SessionStore, StoreError};
pub use storage_service::{open_browser_store, LocalSessionStore};
pub use scheduler::{IntervalScheduler, Scheduler, Subscription};
pub use scroll::{ScrollSource, WindowScroll};
