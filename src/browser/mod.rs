//! 浏览器基础设施层
//!
//! 持有无头浏览器会话的启动逻辑和元素等待原语，不认识 KeywordRow，
//! 不处理业务流程。

pub mod dom;
pub mod headless;

pub use headless::launch_headless_browser;
