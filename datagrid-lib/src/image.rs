//! Image key resolution for image columns.

use std::future::Future;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::error::RemoteError;

/// A resolved image location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// URL the renderer can load.
    pub url: String,
}

/// Turns a stored image key into a loadable URL.
///
/// Any async closure taking the key implements this trait.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// Resolves `key`.
    async fn resolve(&self, key: &str) -> Result<ImageUrl, RemoteError>;
}

#[async_trait]
impl<F, Fut> ImageResolver for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ImageUrl, RemoteError>> + Send + 'static,
{
    async fn resolve(&self, key: &str) -> Result<ImageUrl, RemoteError> {
        (self)(key.to_string()).await
    }
}

/// Returns `true` if `key` can be used as a URL without resolving.
pub fn is_direct_url(key: &str) -> bool {
    key.starts_with("http") || key.starts_with("data:")
}

/// Resolves an image key to a URL.
///
/// Keys starting with `http` or `data:` are returned as is. Anything else
/// needs a resolver. A missing resolver or a failed resolution is logged and
/// leaves the image unresolved; neither is reported to the user.
pub async fn resolve(key: &str, resolver: Option<&dyn ImageResolver>) -> Option<String> {
    if is_direct_url(key) {
        return Some(key.to_string());
    }
    let Some(resolver) = resolver else {
        log::error!("Failed to load image {:?}: no image resolver configured", key);
        return None;
    };
    match resolver.resolve(key).await {
        Ok(image) => Some(image.url),
        Err(e) => {
            log::error!("Failed to load image {:?}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn bucket(key: String) -> Result<ImageUrl, RemoteError> {
        if key.is_empty() {
            return Err(RemoteError::message("empty key"));
        }
        Ok(ImageUrl {
            url: format!("https://cdn.example.com/{}", key),
        })
    }

    #[tokio::test]
    async fn test_direct_urls_skip_resolver() {
        assert_eq!(
            resolve("https://x.test/a.png", None).await.as_deref(),
            Some("https://x.test/a.png")
        );
        assert_eq!(
            resolve("data:image/png;base64,AA", None).await.as_deref(),
            Some("data:image/png;base64,AA")
        );
    }

    #[tokio::test]
    async fn test_resolver_used_for_keys() {
        let resolver = bucket;
        assert_eq!(
            resolve("a.png", Some(&resolver as &dyn ImageResolver)).await.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(resolve("", Some(&resolver as &dyn ImageResolver)).await, None);
    }

    #[tokio::test]
    async fn test_missing_resolver_leaves_image_unresolved() {
        assert_eq!(resolve("a.png", None).await, None);
    }
}
