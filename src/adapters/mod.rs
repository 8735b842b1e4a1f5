// Adapters layer: concrete implementations for external systems (http, html, xlsx, filesystem).

pub mod html;
pub mod http;
pub mod storage;
pub mod xlsx;
