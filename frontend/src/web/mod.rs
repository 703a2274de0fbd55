//! 浏览器 API 封装模块
//!
//! 把 fetch、LocalStorage、History 与 console 适配到核心 crate 的抽象上。

mod console;
mod http;
pub mod route;
pub mod router;
mod storage;

pub use console::init_logging;
pub use http::FetchHttpClient;
pub use storage::LocalTokenStore;
