use crate::domain::model::FormPayload;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Callback invoked with the raw fragment (including the leading `#`, or
/// empty) after every fragment change.
pub type FragmentListener = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The addressable-fragment part of the host environment (`window.location`
/// in a browser).
pub trait Location: Send + Sync {
    fn fragment(&self) -> String;

    /// Writes the fragment. Listeners are notified after the write; writing
    /// the current value again is a no-op.
    fn set_fragment(&self, fragment: &str);

    fn add_fragment_listener(&self, listener: FragmentListener) -> ListenerId;

    fn remove_fragment_listener(&self, id: ListenerId);
}

/// Transport to a third-party form-relay service.
///
/// Returns `Ok(())` only for a 2xx response.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn post_form(&self, endpoint: &Url, payload: &FormPayload) -> Result<()>;
}
