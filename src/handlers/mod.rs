pub mod attachments_handler;
pub mod entries_handler;
pub mod goals_handler;
pub mod health;
pub mod history_handler;
pub mod metrics;
pub mod settings_handler;

pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
