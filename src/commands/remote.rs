//! Remote Task Source
//!
//! One GET per page load. Every failure degrades to "no API tasks".

use notebook_core::{external_from_response, Task};

pub async fn fetch_external_tasks(endpoint: &str) -> Vec<Task> {
    match try_fetch(endpoint).await {
        Ok(tasks) => {
            log::info!("[TASKS] Loaded {} API tasks", tasks.len());
            tasks
        }
        Err(e) => {
            log::warn!("[TASKS] API tasks unavailable: {}", e);
            Vec::new()
        }
    }
}

async fn try_fetch(endpoint: &str) -> Result<Vec<Task>, String> {
    let response = reqwest::get(endpoint).await.map_err(|e| e.to_string())?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(external_from_response(status, &body))
}
