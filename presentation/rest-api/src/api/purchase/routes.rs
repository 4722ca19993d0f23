use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::purchase_history::use_cases::get_recent::GetRecentPurchasesUseCase;
use business::domain::purchase_history::use_cases::get_weekly_stats::GetWeeklyStatsUseCase;

use crate::api::purchase::dto::{PurchaseDayResponse, WeeklyStatsResponse};
use crate::api::tags::ApiTags;

pub struct PurchaseApi {
    get_recent_use_case: Arc<dyn GetRecentPurchasesUseCase>,
    get_weekly_stats_use_case: Arc<dyn GetWeeklyStatsUseCase>,
}

impl PurchaseApi {
    pub fn new(
        get_recent_use_case: Arc<dyn GetRecentPurchasesUseCase>,
        get_weekly_stats_use_case: Arc<dyn GetWeeklyStatsUseCase>,
    ) -> Self {
        Self {
            get_recent_use_case,
            get_weekly_stats_use_case,
        }
    }
}

#[OpenApi]
impl PurchaseApi {
    /// Recent purchases grouped by day
    #[oai(path = "/purchases/recent", method = "get", tag = "ApiTags::Purchases")]
    async fn recent(&self) -> Json<Vec<PurchaseDayResponse>> {
        Json(
            self.get_recent_use_case
                .execute()
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }

    /// This week's purchase summary
    #[oai(
        path = "/purchases/weekly-stats",
        method = "get",
        tag = "ApiTags::Purchases"
    )]
    async fn weekly_stats(&self) -> Json<WeeklyStatsResponse> {
        Json(self.get_weekly_stats_use_case.execute().into())
    }
}
