pub mod clustering;
pub mod digest;
pub mod environment;
pub mod logging;
pub mod newsdata;
pub mod output;
pub mod text;
pub mod types;

pub use digest::build_digest;
pub use types::{ArticleEntry, Digest, NewsItem};

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_CLUSTERING: &str = "clustering";
