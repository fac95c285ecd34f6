pub mod responder;
pub mod worker;

pub use responder::{CannedResponder, select_response};
pub use worker::AssistantWorker;
