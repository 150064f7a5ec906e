use serde::{Deserialize, Serialize};

use crate::database::models::store::StoreEntity;

#[derive(Debug, Deserialize)]
pub struct FindStoreQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddStoreRequest {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStoreRequest {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct StoreListResponse {
    pub stores: Vec<StoreEntity>,
}

#[derive(Debug, Serialize)]
pub struct DeleteStoreResponse {
    pub id: i64,
}
