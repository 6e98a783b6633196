//! 对象缓存层
//!
//! 通过插件注册表按配置选择后端（moka 内存缓存 / redis）。
//! JWT 中间件用它缓存 token -> 用户 的映射，统计结果不走缓存。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};
