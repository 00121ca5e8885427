use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for correlation and tracing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation ID: the event's interaction id or token, else generated
    pub correlation_id: String,
    /// Sequence number within this process
    pub request_seq: u64,
    /// Identity of the caller
    pub identity: String,
    /// Start time for latency tracking
    pub started_at: std::time::Instant,
}

impl RequestContext {
    pub fn new(identity: &str, correlation_id: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = if correlation_id.is_empty() {
            format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple())
        } else {
            correlation_id.to_string()
        };

        Self {
            correlation_id,
            request_seq,
            identity: identity.to_string(),
            started_at: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since request started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!(
            "[req={} user={}]",
            short(&self.correlation_id),
            short(&self.identity)
        )
    }
}

fn short(value: &str) -> String {
    value.chars().take(8).collect()
}
