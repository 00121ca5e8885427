use crate::handlers::response_builder::build_failure_result;
use crate::{RenderableResult, RequestContext};

use log::error;

/// Execute a handler with panic recovery
pub async fn with_error_boundary<F, Fut>(
    ctx: &RequestContext,
    handler_name: &str,
    handler: F,
) -> RenderableResult
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = RenderableResult> + Send + 'static,
{
    // Spawn the handler in a separate task for panic isolation
    let handler_name_owned = handler_name.to_string();
    let log_prefix = ctx.log_prefix();

    let result = tokio::spawn(async move { handler().await }).await;

    match result {
        Ok(response) => response,
        Err(join_error) => {
            // Task panicked or was cancelled
            let panic_msg = if join_error.is_panic() {
                match join_error.into_panic().downcast::<String>() {
                    Ok(msg) => *msg,
                    Err(any) => match any.downcast::<&str>() {
                        Ok(msg) => msg.to_string(),
                        Err(_) => "Unknown panic".to_string(),
                    },
                }
            } else {
                "Task cancelled".to_string()
            };

            error!(
                "{} Handler {} panicked: {}",
                log_prefix, handler_name_owned, panic_msg
            );

            build_failure_result()
        }
    }
}
