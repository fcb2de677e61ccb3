use std::error::Error as StdError;
use std::sync::Arc;

use crate::value::Value;

/// Outcome of a change listener. Failures are contained or propagated by
/// the manager according to its safe mode.
pub type ListenerResult = Result<(), Box<dyn StdError + Send + Sync>>;

/// Callback invoked with `(key, old_value, new_value)` after a committed
/// change. Listeners are identified by pointer, so keep a clone of the
/// `Arc` to unregister one later.
pub type Listener = Arc<dyn Fn(&str, &Value, &Value) -> ListenerResult + Send + Sync>;

/// Wrap a closure as a [`Listener`].
pub fn listener<F>(callback: F) -> Listener
where
    F: Fn(&str, &Value, &Value) -> ListenerResult + Send + Sync + 'static,
{
    Arc::new(callback)
}
