pub mod alert;
pub mod projector;
pub mod sort;

pub use alert::{compute_alert, Alert, AlertSeverity};
pub use projector::{project_board, BoardProjection, StageGroup};
pub use sort::{board_ordering, sort_board};
