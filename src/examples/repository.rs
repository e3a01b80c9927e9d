//! # Example Repository
//!
//! CRUD façade over the store. The backing collection and its id counter
//! sit behind one `RwLock`: mutations take the write lock, reads the read
//! lock, so concurrent creates can never allocate the same id. Locks are
//! held only for the duration of a store operation and never across an
//! await point.

use std::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::pagination::{paginate, Page, DEFAULT_INDEX, DEFAULT_LIMIT};

use super::model::{CreateExampleRequest, ExampleDto, UpdateExampleRequest};
use super::store::ExampleStore;

#[derive(Debug, Default)]
pub struct ExampleRepository {
    store: RwLock<ExampleStore>,
}

impl ExampleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, request: CreateExampleRequest) -> ExampleDto {
        self.store.write().unwrap().insert(request).to_dto()
    }

    /// Create one record per input, in the given order, each with its own
    /// sequential id. A single write lock covers the whole batch so the
    /// ids come out contiguous.
    pub fn add_range(&self, requests: Vec<CreateExampleRequest>) -> Vec<ExampleDto> {
        let mut store = self.store.write().unwrap();
        requests
            .into_iter()
            .map(|request| store.insert(request).to_dto())
            .collect()
    }

    /// One page of projections. Missing parameters fall back to
    /// `DEFAULT_LIMIT` / `DEFAULT_INDEX`; out-of-range pages come back
    /// empty with the real total.
    pub fn get_all(&self, limit: Option<usize>, index: Option<usize>) -> Page<ExampleDto> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let index = index.unwrap_or(DEFAULT_INDEX);

        let store = self.store.read().unwrap();
        let page = paginate(store.all(), limit, index);

        Page {
            items: page.items.iter().map(|e| e.to_dto()).collect(),
            index: page.index,
            total: page.total,
        }
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<ExampleDto> {
        self.store
            .read()
            .unwrap()
            .find(id)
            .map(|e| e.to_dto())
            .ok_or_else(|| not_found(id))
    }

    pub fn update_by_id(&self, id: &str, partial: UpdateExampleRequest) -> AppResult<ExampleDto> {
        self.store
            .write()
            .unwrap()
            .merge(id, partial)
            .map(|e| e.to_dto())
            .ok_or_else(|| not_found(id))
    }

    pub fn delete_by_id(&self, id: &str) -> AppResult<()> {
        if self.store.write().unwrap().remove(id) {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Example with id '{}' not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn request(name: &str) -> CreateExampleRequest {
        CreateExampleRequest {
            name: name.to_string(),
            description: String::new(),
            status: "new".to_string(),
        }
    }

    #[test]
    fn test_create_returns_projection_with_sequential_ids() {
        let repo = ExampleRepository::new();
        assert_eq!(repo.create(request("a")).id, "1");
        assert_eq!(repo.create(request("b")).id, "2");
    }

    #[test]
    fn test_add_range_preserves_input_order() {
        let repo = ExampleRepository::new();
        let created = repo.add_range(vec![request("x"), request("y"), request("z")]);

        let names: Vec<&str> = created.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
        assert_eq!(created[0].id, "1");
        assert_eq!(created[2].id, "3");
    }

    #[test]
    fn test_get_all_defaults_and_total() {
        let repo = ExampleRepository::new();
        for i in 0..15 {
            repo.create(request(&format!("e{}", i)));
        }

        let page = repo.get_all(None, None);
        assert_eq!(page.items.len(), DEFAULT_LIMIT);
        assert_eq!(page.index, DEFAULT_INDEX);
        assert_eq!(page.total, 15);

        let beyond = repo.get_all(Some(10), Some(5));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 15);
    }

    #[test]
    fn test_get_by_id_not_found_names_the_id() {
        let repo = ExampleRepository::new();
        let err = repo.get_by_id("7").unwrap_err();
        assert!(err.to_string().contains("'7'"));
    }

    #[test]
    fn test_update_then_get_reflects_merge() {
        let repo = ExampleRepository::new();
        repo.create(request("a"));

        let updated = repo
            .update_by_id(
                "1",
                UpdateExampleRequest {
                    status: Some("done".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, "done");
        assert_eq!(updated.name, "a");

        assert_eq!(repo.get_by_id("1").unwrap().status, "done");
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let repo = ExampleRepository::new();
        repo.create(request("a"));
        repo.create(request("b"));

        repo.delete_by_id("1").unwrap();
        assert!(repo.get_by_id("1").is_err());
        assert_eq!(repo.get_all(None, None).total, 1);

        assert!(repo.delete_by_id("1").is_err());
    }

    #[test]
    fn test_concurrent_creates_never_share_an_id() {
        let repo = Arc::new(ExampleRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| repo.create(request(&format!("t{}", i))).id)
                        .collect::<Vec<String>>()
                })
            })
            .collect();

        let mut ids: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let count = ids.len();

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
        assert_eq!(repo.get_all(Some(0), Some(0)).total, count);
    }
}
