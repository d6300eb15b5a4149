use std::io::{self, Write};

use axum::body::Body;
use bytes::Bytes;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::core::data::raster::Raster;
use crate::storage::write_png::write_png;

const CHANNEL_DEPTH: usize = 8;

type Chunk = Result<Bytes, io::Error>;

/// `io::Write` sink that forwards every write to an async body stream.
///
/// Must be driven from a blocking thread. Writing after the receiving side
/// has gone away (client disconnect) fails with `BrokenPipe`.
pub struct ChannelWriter {
    tx: mpsc::Sender<Chunk>,
}

impl ChannelWriter {
    #[must_use]
    pub fn new(tx: mpsc::Sender<Chunk>) -> Self {
        Self { tx }
    }

    /// Terminates the stream with an error so the transfer is aborted
    /// rather than completing with a truncated image.
    pub fn abort(self, err: io::Error) {
        let _ = self.tx.blocking_send(Err(err));
    }
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.tx
            .blocking_send(Ok(Bytes::copy_from_slice(buf)))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "response body dropped"))?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Encodes `raster` on the blocking pool and returns a body that yields the
/// PNG bytes as they are produced.
pub fn stream_png(raster: Raster, label: String) -> Body {
    let (tx, rx) = mpsc::channel::<Chunk>(CHANNEL_DEPTH);

    tokio::task::spawn_blocking(move || {
        let mut writer = ChannelWriter::new(tx);

        match write_png(&raster, &mut writer) {
            Ok(()) => debug!(tile = %label, "tile streamed"),
            Err(err) => {
                error!(tile = %label, error = %err, "tile encoding failed");
                writer.abort(io::Error::other(err));
            }
        }
    });

    receiver_body(rx)
}

fn receiver_body(rx: mpsc::Receiver<Chunk>) -> Body {
    Body::from_stream(futures::stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|chunk| (chunk, rx))
    }))
}
