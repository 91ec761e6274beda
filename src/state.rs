/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (中身は Copy のみ)
 */
use std::time::Instant;

use crate::config::AppEnv;

#[derive(Clone, Debug)]
pub struct AppState {
    pub app_env: AppEnv,
    started_at: Instant,
}

impl AppState {
    pub fn new(app_env: AppEnv) -> Self {
        Self {
            app_env,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
