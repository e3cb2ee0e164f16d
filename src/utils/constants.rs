pub const DEMO_PLANTS: [&str; 4] = ["sweet basil", "meidical neem", "aloe vera", "tulsi"];

// multipart field carrying the image
pub const UPLOAD_FIELD_NAME: &str = "file";
pub const DEFAULT_FILE_EXTENSION: &str = "jpg";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;
pub const DEFAULT_UPLOADS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/uploads");
pub const SERVER_REQUEST_BODY_LIMIT: usize = 50 * 1024 * 1024;
pub const SERVER_REQUEST_TIMEOUT_SECS: u64 = 60;
