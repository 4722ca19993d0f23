use crate::domain::suggestion::model::RankedTopItem;

pub trait GetTopItemsUseCase: Send + Sync {
    fn execute(&self) -> Vec<RankedTopItem>;
}
