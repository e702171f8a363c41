//! Club endpoints

use std::sync::Arc;

use shared::models::{Club, ClubCreate, ClubUpdate};
use shared::response::ApiResponse;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct ClubApi<C> {
    http: Arc<C>,
}

impl<C> Clone for ClubApi<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<C: HttpClient> ClubApi<C> {
    pub(crate) fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Club>> {
        self.http
            .get::<ApiResponse<Vec<Club>>>("/clubs")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing club data".to_string()))
    }

    pub async fn get(&self, id: &str) -> ClientResult<Club> {
        self.http
            .get::<ApiResponse<Club>>(&format!("/clubs/{}", id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing club data".to_string()))
    }

    pub async fn create(&self, payload: &ClubCreate) -> ClientResult<Club> {
        self.http
            .post::<ApiResponse<Club>, _>("/clubs", payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing club data".to_string()))
    }

    pub async fn update(&self, id: &str, payload: &ClubUpdate) -> ClientResult<Club> {
        self.http
            .put::<ApiResponse<Club>, _>(&format!("/clubs/{}", id), payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing club data".to_string()))
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<()>>(&format!("/clubs/{}", id))
            .await?;
        Ok(())
    }
}
