#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Duration;
use reel_api::auth::JwtVerifier;
use reel_api::setup::routes::setup_routes;
use reel_api::AppState;
use reel_core::models::{NewVideo, Video};
use reel_core::Config;
use reel_db::{MemoryVideoStore, VideoStore};
use reel_storage::LocalStorage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "reel-test-secret-0123456789abcdef";
pub const TEST_JWT_ISSUER: &str = "reel-access";
pub const ASSETS_BASE_URL: &str = "http://localhost:8091/assets";

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub videos: MemoryVideoStore,
    pub verifier: JwtVerifier,
    pub assets: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Mint a valid bearer token for `user_id`
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.verifier
            .issue(user_id, Duration::hours(1))
            .expect("Failed to sign test token")
    }

    /// Seed a draft video with a fixed id
    pub async fn seed_video(&self, id: Uuid, user_id: Uuid) -> Video {
        let mut video = Video::draft(
            user_id,
            NewVideo {
                title: "Boots in the field".to_string(),
                description: "Test upload".to_string(),
            },
        );
        video.id = id;
        self.videos.insert(video.clone()).await;
        video
    }

    pub fn assets_root(&self) -> &Path {
        self.assets.path()
    }

    /// Every file currently under the assets root
    pub fn stored_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.assets.path())
            .expect("Failed to read assets root")
            .map(|entry| entry.expect("Failed to read dir entry").path())
            .collect()
    }
}

pub fn test_config(assets_root: &Path) -> Config {
    Config {
        server_port: 8091,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_issuer: TEST_JWT_ISSUER.to_string(),
        database_url: None,
        db_max_connections: 1,
        db_timeout_seconds: 1,
        assets_root: assets_root.to_path_buf(),
        assets_base_url: ASSETS_BASE_URL.to_string(),
        max_upload_size_bytes: None,
    }
}

/// Setup a test application backed by the memory store and a temp assets root
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_config(|_| {}).await
}

/// Setup a test application with adjusted configuration
pub async fn setup_test_app_with_config(configure: impl FnOnce(&mut Config)) -> TestApp {
    let videos = MemoryVideoStore::new();
    build_test_app(videos.clone(), Arc::new(videos), configure).await
}

/// Setup a test application with a custom record store in front of `videos`
pub async fn build_test_app(
    videos: MemoryVideoStore,
    store: Arc<dyn VideoStore>,
    configure: impl FnOnce(&mut Config),
) -> TestApp {
    let assets = TempDir::new().expect("Failed to create temp assets root");
    let mut config = test_config(assets.path());
    configure(&mut config);

    let storage = LocalStorage::new(assets.path(), ASSETS_BASE_URL.to_string())
        .await
        .expect("Failed to create local storage");

    let state = Arc::new(AppState::new(config, store, Arc::new(storage)));
    let router = setup_routes(state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        videos,
        verifier: JwtVerifier::new(TEST_JWT_SECRET, TEST_JWT_ISSUER),
        assets,
    }
}

/// A ten byte PNG-looking payload
pub fn png_bytes() -> Vec<u8> {
    vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01]
}
