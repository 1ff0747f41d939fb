//! Store crate: the data-owning layer of the outreach tool.
//!
//! ## Modules
//!
//! - [`config`] – StoreConfig (reply delay and content, env-loaded)
//! - [`conversations`] – ConversationStore (threads, send, simulated reply)
//! - [`scheduler`] – SchedulerRegistry (pending scheduled sends)
//! - [`seed`] – embedded initial dataset

pub mod config;
pub mod conversations;
pub mod scheduler;
pub mod seed;

pub use config::{StoreConfig, DEFAULT_REPLY_CONTENT, DEFAULT_REPLY_DELAY_MS};
pub use conversations::ConversationStore;
pub use scheduler::SchedulerRegistry;
