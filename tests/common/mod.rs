#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tinylink::domain::entities::{NewUrlMapping, UrlMapping};
use tinylink::domain::repositories::{MappingRepository, StorageError, StorageResult};
use tinylink::infrastructure::persistence::InMemoryMappingRepository;
use tinylink::routes::{app_router, build_router};
use tinylink::state::AppState;
use tinylink::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

pub const BASE_URL: &str = "http://localhost:5000";

/// Hands out a fixed list of codes, then repeats the last one.
pub struct SequenceCodeGenerator {
    codes: Vec<String>,
    next: AtomicUsize,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let idx = self.next.fetch_add(1, Ordering::SeqCst);
        self.codes[idx.min(self.codes.len() - 1)].clone()
    }
}

/// Store whose every operation fails with a backend error.
pub struct FailingRepository;

fn backend_down() -> StorageError {
    StorageError::Backend("store unavailable".to_string())
}

#[async_trait]
impl MappingRepository for FailingRepository {
    async fn insert(&self, _new_mapping: NewUrlMapping) -> StorageResult<UrlMapping> {
        Err(backend_down())
    }

    async fn find_by_code(&self, _code: &str) -> StorageResult<Option<UrlMapping>> {
        Err(backend_down())
    }

    async fn find_by_original_url(&self, _original_url: &str) -> StorageResult<Option<UrlMapping>> {
        Err(backend_down())
    }

    async fn list_all(&self) -> StorageResult<Vec<UrlMapping>> {
        Err(backend_down())
    }

    async fn count(&self) -> StorageResult<usize> {
        Err(backend_down())
    }
}

pub fn create_failing_state() -> AppState {
    AppState::with_parts(
        Arc::new(FailingRepository),
        Arc::new(RandomCodeGenerator::new()),
        BASE_URL,
    )
}

pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let state = AppState::with_parts(repo.clone(), Arc::new(RandomCodeGenerator::new()), BASE_URL);
    (state, repo)
}

pub fn create_state_with_generator(
    generator: Arc<SequenceCodeGenerator>,
) -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let state = AppState::with_parts(repo.clone(), generator, BASE_URL);
    (state, repo)
}

pub async fn create_test_mapping(repo: &InMemoryMappingRepository, code: &str, url: &str) {
    repo.insert(NewUrlMapping {
        original_url: url.to_string(),
        short_code: code.to_string(),
    })
    .await
    .unwrap();
}

pub fn full_app_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

/// Full router including trailing-slash normalization.
pub fn normalized_app_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}
