//! Notion sync: page updates and the projects database.

use serde_json::json;

use kaigi_core::{NotionProject, NotionUpdateResponse, Result};

use crate::client::ApiClient;

impl ApiClient {
    /// Push an edited summary to the job's Notion page via
    /// `PUT /api/notion/update`.
    pub async fn update_notion_page(
        &self,
        job_id: &str,
        summary: &str,
    ) -> Result<NotionUpdateResponse> {
        let url = self.url("/api/notion/update");
        let body = json!({ "job_id": job_id, "summary": summary });
        let response = self.http.put(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "Notionの更新に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// Fetch the project list from the Notion projects database via
    /// `GET /api/projects`.
    pub async fn get_projects(&self) -> Result<Vec<NotionProject>> {
        let url = self.url("/api/projects");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "案件一覧の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }
}
