use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

/// Redis 缓存后端，多实例部署时共享 token 缓存
pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64, // 默认 TTL（秒）
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Failed to create Redis client: {e}"))?;

        // 启动时做一次同步 PING，尽早暴露连接配置错误
        match client.get_connection() {
            Ok(mut conn) => match redis::cmd("PING").query::<String>(&mut conn) {
                Ok(response) => {
                    debug!("Redis connection test successful: {}", response);
                }
                Err(e) => {
                    error!(
                        "Failed to ping Redis server: {}. Check Redis server status and URL: {}",
                        e, redis_config.url
                    );
                    return Err(format!("Redis ping failed: {e}"));
                }
            },
            Err(e) => {
                error!(
                    "Failed to connect to Redis server: {}. Check Redis URL: {}",
                    e, redis_config.url
                );
                return Err(format!("Redis connection failed: {e}"));
            }
        }

        debug!(
            "RedisObjectCache created with prefix: '{}', TTL: {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            ttl: config.cache.default_ttl,
        })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        match conn.get::<String, Option<String>>(redis_key).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let redis_key = self.make_key(&key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return;
            }
        };

        // ttl 为 0 时使用配置的默认 TTL
        let effective_ttl = if ttl == 0 { self.ttl } else { ttl };

        if let Err(e) = conn
            .set_ex::<String, String, ()>(redis_key, value, effective_ttl)
            .await
        {
            error!("Failed to insert key '{}' into cache: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                return;
            }
        };

        if let Err(e) = conn.del::<String, i32>(redis_key).await {
            error!("Failed to remove key '{}': {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        // 共享 Redis 上全量清空会影响其他实例，不提供该操作
        warn!("RedisObjectCache does not implement invalidate_all");
    }
}
