use std::future::Future;

/// Re-resolves a foreign reference during an update.
///
/// When `requested` carries an id and `load` finds it, the freshly loaded
/// value replaces `current`. A missing id or a lookup that finds nothing keeps
/// `current`. Lookup errors propagate.
pub async fn reresolve<T, E, F, Fut>(current: T, requested: Option<i32>, load: F) -> Result<T, E>
where
    F: FnOnce(i32) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let Some(id) = requested else {
        return Ok(current);
    };

    match load(id).await? {
        Some(fresh) => Ok(fresh),
        None => {
            tracing::debug!(requested_id = id, "reference did not resolve, keeping current");
            Ok(current)
        }
    }
}
