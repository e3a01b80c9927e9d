//! Spreadsheet extraction for bulk example import.
//!
//! Rows are CSV with a `name,description,status` header and deserialize
//! straight into create requests. A malformed row fails the whole import;
//! nothing is inserted in that case because extraction happens before the
//! repository is touched.

use crate::error::{AppError, AppResult};
use crate::examples::CreateExampleRequest;

pub fn extract_examples(bytes: &[u8]) -> AppResult<Vec<CreateExampleRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut requests = Vec::new();
    for (row, record) in reader.deserialize::<CreateExampleRequest>().enumerate() {
        // header is line 1, so the first data row is line 2
        let request = record.map_err(|e| {
            AppError::BadRequest(format!("Invalid spreadsheet row {}: {}", row + 2, e))
        })?;
        requests.push(request);
    }

    Ok(requests)
}
