use serde::{Deserialize, Serialize};

/// A recipe from `/api/getAllRecipes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: String,
    pub drink_name: String,
    pub flavor: String,
    pub mood: String,
    pub intensity: i32,
}

/// Items of one ingredient type, with the unit they are measured in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<String>,
    pub unit: String,
}
