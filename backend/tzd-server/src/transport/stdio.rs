use crate::error::{Result as ServerErrorResult, ServerError};
use crate::transport::wire::{WireInbound, WireOutbound};

use tzd_bot::Dispatcher;

use log::{debug, error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

const OUTBOUND_BUFFER: usize = 256;

#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Role id that marks a caller as an operator
    pub operator_role_id: Option<String>,
}

/// Serve events from `reader` until EOF, writing replies to `writer`.
///
/// The command definitions go out first. Each event is dispatched on its
/// own task and answered with a `reply` line carrying the event's
/// correlation id. In-flight events are drained before returning the writer.
pub async fn run<R, W>(
    dispatcher: Dispatcher,
    config: TransportConfig,
    reader: R,
    writer: W,
) -> ServerErrorResult<W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<WireOutbound>(OUTBOUND_BUFFER);
    let writer_task = tokio::spawn(write_lines(rx, writer));

    let register = WireOutbound::RegisterCommands {
        commands: dispatcher.command_definitions(),
    };
    if tx.send(register).await.is_err() {
        warn!("Writer closed before command registration");
    }

    let mut lines = reader.lines();
    let mut received: u64 = 0;
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(source) => {
                error!("Failed to read inbound line: {}", source);
                return Err(ServerError::Io {
                    context: "inbound stream",
                    source,
                });
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        received += 1;

        let inbound: WireInbound = match serde_json::from_str(&line) {
            Ok(inbound) => inbound,
            Err(e) => {
                warn!("Rejected inbound line: {}", e);
                let rejected = WireOutbound::Rejected {
                    message: format!("Malformed event: {e}"),
                };
                if tx.send(rejected).await.is_err() {
                    break;
                }
                continue;
            }
        };

        let event = inbound.into_event(config.operator_role_id.as_deref());
        let correlation_id = event.correlation_id().to_string();
        let dispatcher = dispatcher.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            let result = dispatcher.dispatch(event).await;
            if tx
                .send(WireOutbound::reply(correlation_id, result))
                .await
                .is_err()
            {
                warn!("Writer closed, reply dropped");
            }
        });
    }

    info!("Inbound stream closed after {} event(s)", received);

    // Writer finishes once every in-flight task has dropped its sender
    drop(tx);
    match writer_task.await {
        Ok(result) => result,
        Err(e) => Err(ServerError::Io {
            context: "outbound writer",
            source: std::io::Error::other(e),
        }),
    }
}

async fn write_lines<W>(mut rx: mpsc::Receiver<WireOutbound>, mut writer: W) -> ServerErrorResult<W>
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = rx.recv().await {
        let mut line = serde_json::to_vec(&message).map_err(|source| ServerError::Encode {
            what: "outbound line",
            source,
        })?;
        line.push(b'\n');

        writer
            .write_all(&line)
            .await
            .map_err(|source| ServerError::Io {
                context: "outbound stream",
                source,
            })?;
        writer.flush().await.map_err(|source| ServerError::Io {
            context: "outbound stream",
            source,
        })?;
        debug!("Wrote {} byte line", line.len());
    }

    Ok(writer)
}
