mod health;
mod infographics;
mod uploads;

pub use health::{health, HealthResponse};
pub use infographics::{create_infographic, delete_infographic, list_infographics};
pub use uploads::{upload_file, UploadResponse};
