use sea_orm::DatabaseConnection;

use crate::server::state::AppState;


/// Builds an [`AppState`] around a test database connection.
fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone())
}

/// Reads a response body and parses it as JSON.
async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
