use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 找到缓存值
    Found(T),
    /// 键不存在
    NotFound,
    /// 键存在但取值失败（如后端连接异常）
    ExistsButNoValue,
}

/// 对象缓存统一接口
///
/// 值以 JSON 字符串存取，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 获取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 插入原始字符串值，ttl 单位为秒，0 表示使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除键
    async fn remove(&self, key: &str);

    /// 清空全部缓存
    async fn invalidate_all(&self);
}

/// 声明并注册一个对象缓存插件
///
/// 用法: `declare_object_cache_plugin!("moka", MokaCacheWrapper);`
/// 通过 ctor 在程序启动时将构造函数写入插件注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$plugin>::new()
                            .map_err($crate::errors::SchoolIncError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    }) as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
