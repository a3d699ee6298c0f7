//! CRM wrappers: customers, deals, and tasks.

use serde_json::json;

use kaigi_core::{
    Customer, CustomerCreate, CustomerUpdate, Deal, DealCreate, DealStatus, DealUpdate, Result,
    Task, TaskCreate, TaskDecomposeResponse, TaskExtractResponse, TaskFilters,
    TaskRegisterResponse, TaskUpdate,
};

use crate::client::ApiClient;

impl ApiClient {
    // ─── Customers ──────────────────────────────────────────────────────

    /// `GET /api/customers`
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        let url = self.url("/api/customers");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "顧客一覧の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `GET /api/customers/{id}`
    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let url = self.url(&format!("/api/customers/{}", customer_id));
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "顧客情報の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `POST /api/customers`
    pub async fn create_customer(&self, data: &CustomerCreate) -> Result<Customer> {
        let url = self.url("/api/customers");
        let response = self.http.post(&url).json(data).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "顧客の作成に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// `PUT /api/customers/{id}`
    pub async fn update_customer(
        &self,
        customer_id: &str,
        data: &CustomerUpdate,
    ) -> Result<Customer> {
        let url = self.url(&format!("/api/customers/{}", customer_id));
        let response = self.http.put(&url).json(data).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "顧客情報の更新に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `DELETE /api/customers/{id}`
    pub async fn delete_customer(&self, customer_id: &str) -> Result<()> {
        let url = self.url(&format!("/api/customers/{}", customer_id));
        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "顧客の削除に失敗しました").await);
        }
        Ok(())
    }

    // ─── Deals ──────────────────────────────────────────────────────────

    /// `GET /api/deals`, optionally filtered by customer and/or stage.
    pub async fn list_deals(
        &self,
        customer_id: Option<&str>,
        status: Option<DealStatus>,
    ) -> Result<Vec<Deal>> {
        let url = self.url("/api/deals");
        let mut request = self.http.get(&url);
        if let Some(id) = customer_id {
            request = request.query(&[("customer_id", id)]);
        }
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "商談一覧の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `GET /api/deals/{id}`
    pub async fn get_deal(&self, deal_id: &str) -> Result<Deal> {
        let url = self.url(&format!("/api/deals/{}", deal_id));
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "商談情報の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `POST /api/deals`
    pub async fn create_deal(&self, data: &DealCreate) -> Result<Deal> {
        let url = self.url("/api/deals");
        let response = self.http.post(&url).json(data).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "商談の作成に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// `PUT /api/deals/{id}`
    pub async fn update_deal(&self, deal_id: &str, data: &DealUpdate) -> Result<Deal> {
        let url = self.url(&format!("/api/deals/{}", deal_id));
        let response = self.http.put(&url).json(data).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "商談の更新に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// `DELETE /api/deals/{id}`
    pub async fn delete_deal(&self, deal_id: &str) -> Result<()> {
        let url = self.url(&format!("/api/deals/{}", deal_id));
        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "商談の削除に失敗しました").await);
        }
        Ok(())
    }

    // ─── Tasks ──────────────────────────────────────────────────────────

    /// `GET /api/tasks` with server-side filters and sorting.
    pub async fn list_tasks(
        &self,
        filters: &TaskFilters,
        sort_by: &str,
        sort_order: &str,
    ) -> Result<Vec<Task>> {
        let url = self.url("/api/tasks");
        let mut request = self.http.get(&url);
        if let Some(project_id) = &filters.project_id {
            request = request.query(&[("project_id", project_id.as_str())]);
        }
        if let Some(assignee) = &filters.assignee {
            request = request.query(&[("assignee", assignee.as_str())]);
        }
        if let Some(status) = filters.status {
            request = request.query(&[("status", status.as_str())]);
        }
        if let Some(priority) = filters.priority {
            request = request.query(&[("priority", priority.as_str())]);
        }
        request = request.query(&[("sort_by", sort_by), ("sort_order", sort_order)]);

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "タスク一覧の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `GET /api/tasks/{id}`
    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        let url = self.url(&format!("/api/tasks/{}", task_id));
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "タスク情報の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// `PUT /api/tasks/{id}`
    pub async fn update_task(&self, task_id: &str, data: &TaskUpdate) -> Result<Task> {
        let url = self.url(&format!("/api/tasks/{}", task_id));
        let response = self.http.put(&url).json(data).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "タスクの更新に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// `DELETE /api/tasks/{id}`
    pub async fn delete_task(&self, task_id: &str) -> Result<()> {
        let url = self.url(&format!("/api/tasks/{}", task_id));
        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "タスクの削除に失敗しました").await);
        }
        Ok(())
    }

    /// Extract task candidates from a summary via `POST /api/tasks/extract`.
    pub async fn extract_tasks(
        &self,
        job_id: &str,
        summary: &str,
        meeting_date: &str,
    ) -> Result<TaskExtractResponse> {
        let url = self.url("/api/tasks/extract");
        let body = json!({
            "job_id": job_id,
            "summary": summary,
            "meeting_date": meeting_date,
        });
        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "タスク抽出に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// Decompose an abstract task into sub-tasks via
    /// `POST /api/tasks/decompose`.
    pub async fn decompose_task(
        &self,
        task_title: &str,
        task_description: Option<&str>,
        parent_due_date: &str,
    ) -> Result<TaskDecomposeResponse> {
        let url = self.url("/api/tasks/decompose");
        let body = json!({
            "task_title": task_title,
            "task_description": task_description,
            "parent_due_date": parent_due_date,
        });
        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "タスク分解に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// Register extracted tasks against a project via
    /// `POST /api/tasks/register`.
    pub async fn register_tasks(
        &self,
        job_id: &str,
        project_id: &str,
        tasks: &[TaskCreate],
    ) -> Result<TaskRegisterResponse> {
        let url = self.url("/api/tasks/register");
        let body = json!({
            "job_id": job_id,
            "project_id": project_id,
            "tasks": tasks,
        });
        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "タスク登録に失敗しました").await);
        }
        Self::parse_json(response).await
    }
}
