//! Print the OpenAPI document as JSON, for CI diffing and client generation.

use backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), serde_json::Error> {
    let document = ApiDoc::openapi().to_json()?;
    println!("{document}");
    Ok(())
}
