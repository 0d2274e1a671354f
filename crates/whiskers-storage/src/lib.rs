// SQLite storage layer with sqlx
//
// One table, `event`, holding calendar entries. The schema is created (or
// dropped and re-created) by the server at startup; see `schema`.

pub mod models;
pub mod repositories;
pub mod schema;

pub use models::*;
pub use repositories::*;
