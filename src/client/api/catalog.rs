use log::info;
use super::{ApiClient, GET_ALL_BRANCHES, GET_ALL_RECIPES, GET_AVAILABLE_BRANCHES, GET_ITEMS, GET_TYPES};
use crate::client::controller::error::ClientResult;
use crate::client::model::branch::Branch;
use crate::client::model::drink::{Drink, ItemsResponse};
use crate::client::model::reservation::AvailabilityQuery;

impl ApiClient {
    pub async fn get_all_branches(&self) -> ClientResult<Vec<Branch>> {
        let branches: Vec<Branch> = self.get(GET_ALL_BRANCHES, &[]).await?;
        info!("fetched {} branches", branches.len());
        Ok(branches)
    }

    pub async fn get_all_recipes(&self) -> ClientResult<Vec<Drink>> {
        let drinks: Vec<Drink> = self.get(GET_ALL_RECIPES, &[]).await?;
        info!("fetched {} drinks", drinks.len());
        Ok(drinks)
    }

    /// Ingredient types a custom drink can be built from
    pub async fn get_types(&self) -> ClientResult<Vec<String>> {
        self.get(GET_TYPES, &[]).await
    }

    pub async fn get_items(&self, kind: &str) -> ClientResult<ItemsResponse> {
        self.get(GET_ITEMS, &[("type", kind)]).await
    }

    /// Branches with room for the party at the given slot
    pub async fn get_available_branches(&self, query: &AvailabilityQuery) -> ClientResult<Vec<Branch>> {
        self.post(GET_AVAILABLE_BRANCHES, query).await
    }
}
