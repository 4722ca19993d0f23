use crate::domain::purchase_history::stats::WeeklyStats;

pub trait GetWeeklyStatsUseCase: Send + Sync {
    fn execute(&self) -> WeeklyStats;
}
