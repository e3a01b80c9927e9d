//! # Example Store
//!
//! Volatile, insertion-ordered backing collection for example records.
//! Ids come from a process-wide monotonic counter starting at 1, rendered
//! as decimal strings. The store itself is not synchronized; the
//! repository wraps it in a single lock boundary.

use chrono::Utc;

use super::model::{CreateExampleRequest, Example, UpdateExampleRequest};

#[derive(Debug)]
pub struct ExampleStore {
    examples: Vec<Example>,
    next_id: u64,
}

impl Default for ExampleStore {
    fn default() -> Self {
        Self {
            examples: Vec::new(),
            next_id: 1,
        }
    }
}

impl ExampleStore {
    /// Append a new record, stamping both timestamps to now.
    pub fn insert(&mut self, request: CreateExampleRequest) -> Example {
        let now = Utc::now();
        let example = Example {
            id: self.allocate_id(),
            name: request.name,
            description: request.description,
            status: request.status,
            created_at: now,
            updated_at: now,
        };

        self.examples.push(example.clone());
        example
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Example] {
        &self.examples
    }

    pub fn find(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    /// Shallow-merge `partial` over the record with the given id: only
    /// present fields overwrite, `updated_at` is refreshed, `id` and
    /// `created_at` are untouched.
    pub fn merge(&mut self, id: &str, partial: UpdateExampleRequest) -> Option<&Example> {
        let example = self.examples.iter_mut().find(|e| e.id == id)?;

        if let Some(name) = partial.name {
            example.name = name;
        }
        if let Some(description) = partial.description {
            example.description = description;
        }
        if let Some(status) = partial.status {
            example.status = status;
        }
        example.updated_at = Utc::now();

        Some(example)
    }

    /// Remove the record with the given id, preserving the relative order
    /// of the remainder. Returns whether a record was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.examples.iter().position(|e| e.id == id) {
            Some(position) => {
                self.examples.remove(position);
                true
            }
            None => false,
        }
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CreateExampleRequest {
        CreateExampleRequest {
            name: name.to_string(),
            description: format!("{} description", name),
            status: "new".to_string(),
        }
    }

    #[test]
    fn test_ids_are_sequential_decimal_strings_from_one() {
        let mut store = ExampleStore::default();
        let ids: Vec<String> = (0..5)
            .map(|i| store.insert(request(&format!("e{}", i))).id)
            .collect();

        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_ids_stay_unique_after_deletes() {
        let mut store = ExampleStore::default();
        store.insert(request("a"));
        store.insert(request("b"));
        assert!(store.remove("2"));

        // the freed id is never reused
        let next = store.insert(request("c"));
        assert_eq!(next.id, "3");
    }

    #[test]
    fn test_merge_updates_only_present_fields() {
        let mut store = ExampleStore::default();
        let created = store.insert(request("a"));

        std::thread::sleep(std::time::Duration::from_millis(5));
        let updated = store
            .merge(
                "1",
                UpdateExampleRequest {
                    status: Some("done".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, "done");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test]
    fn test_merge_missing_id_is_none() {
        let mut store = ExampleStore::default();
        assert!(store.merge("9", UpdateExampleRequest::default()).is_none());
    }

    #[test]
    fn test_remove_preserves_order_of_remainder() {
        let mut store = ExampleStore::default();
        for name in ["a", "b", "c"] {
            store.insert(request(name));
        }

        assert!(store.remove("2"));
        let names: Vec<&str> = store.all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(!store.remove("2"));
    }
}
