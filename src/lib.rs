pub mod assistant;
pub mod logging;
pub mod utils;

pub use assistant::{Intent, IntentResponder};
