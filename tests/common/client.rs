#![allow(dead_code)]
use reqwest::Url;
use todo_backend::TodoId;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn healthz(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("healthz").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, subject: &str, description: &str) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .json(&serde_json::json!({
                "subject": subject,
                "description": description,
            }))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_raw(&self, body: &str) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
    }

    pub async fn read_todos(&self, prev_id: Option<TodoId>, size: Option<i64>) -> reqwest::Response {
        let mut url = self.url.join("todos").unwrap();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(prev_id) = prev_id {
                pairs.append_pair("prev_id", &prev_id.to_string());
            }
            if let Some(size) = size {
                pairs.append_pair("size", &size.to_string());
            }
        }
        self.client.get(url).send().await.unwrap()
    }

    pub async fn update_todo(
        &self,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> reqwest::Response {
        self.client
            .put(self.url.join("todos").unwrap())
            .json(&serde_json::json!({
                "id": id,
                "subject": subject,
                "description": description,
            }))
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todos(&self, ids: &[TodoId]) -> reqwest::Response {
        self.client
            .delete(self.url.join("todos").unwrap())
            .json(&serde_json::json!({ "ids": ids }))
            .send()
            .await
            .unwrap()
    }
}
