/// Maximum number of history records scanned per achievement evaluation
pub const DEFAULT_HISTORY_WINDOW: usize = 100;

/// Decimal precision for persisted carbon scores
pub const SCORE_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for completion percentages
pub const COMPLETION_DECIMAL_PRECISION: u32 = 0;
