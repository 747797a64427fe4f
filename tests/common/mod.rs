#![allow(dead_code)]

use axum_test::TestServer;
use http_url_shortener::domain::entities::ShortenedUrl;
use http_url_shortener::infrastructure::persistence::{
    FileManifestRepository, InMemoryRepository,
};
use http_url_shortener::routes::router;
use http_url_shortener::state::AppState;
use std::path::Path;
use std::sync::Arc;

pub const TEST_HOST: &str = "localhost:8080";

pub fn create_memory_state(entries: &[(&str, &str)]) -> (AppState, Arc<InMemoryRepository>) {
    let repository = Arc::new(InMemoryRepository::with_entries(
        entries
            .iter()
            .map(|(long, short)| ShortenedUrl::new(*long, *short)),
    ));

    let state = AppState::with_repository(repository.clone(), TEST_HOST);

    (state, repository)
}

pub fn create_file_state(data_dir: &Path) -> (AppState, Arc<FileManifestRepository>) {
    let repository = Arc::new(FileManifestRepository::new(data_dir));

    let state = AppState::with_repository(repository.clone(), TEST_HOST);

    (state, repository)
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub fn manifest_path(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join(FileManifestRepository::FILE_NAME)
}

pub fn write_manifest(data_dir: &Path, contents: &str) {
    std::fs::write(manifest_path(data_dir), contents).unwrap();
}

pub fn read_manifest(data_dir: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(manifest_path(data_dir)).unwrap();
    serde_json::from_str(&raw).unwrap()
}
