//! Transports for message batches.
//!
//! The codec is synchronous: the sender hands off a batch when it fills up and
//! the receiver blocks for the next batch when it runs out.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use tokio::sync::mpsc;

use super::message::RpcObjectData;
use crate::error::RpcError;

pub trait BatchSink {
    fn send_batch(&mut self, batch: Vec<RpcObjectData>) -> Result<(), RpcError>;
}

pub trait BatchSource {
    /// The next batch, or [`RpcError::ChannelClosed`] once the peer is gone.
    fn next_batch(&mut self) -> Result<Vec<RpcObjectData>, RpcError>;
}

/// An in-process queue usable as both ends, for a sender and receiver that take turns.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    batches: VecDeque<Vec<RpcObjectData>>,
    pub sent_batches: usize,
    pub sent_messages: usize,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches sent and not yet read.
    pub fn pending(&self) -> usize {
        self.batches.len()
    }

    /// Every message sent and not yet read, in order.
    pub fn messages(&self) -> impl Iterator<Item = &RpcObjectData> {
        self.batches.iter().flatten()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

impl BatchSink for MemoryChannel {
    fn send_batch(&mut self, batch: Vec<RpcObjectData>) -> Result<(), RpcError> {
        self.sent_batches += 1;
        self.sent_messages += batch.len();
        self.batches.push_back(batch);
        Ok(())
    }
}

impl BatchSource for MemoryChannel {
    fn next_batch(&mut self) -> Result<Vec<RpcObjectData>, RpcError> {
        self.batches.pop_front().ok_or(RpcError::ChannelClosed)
    }
}

/// Sending end of a tokio channel.
#[derive(Debug, Clone)]
pub struct MpscSink {
    tx: mpsc::UnboundedSender<Vec<RpcObjectData>>,
}

/// Receiving end of a tokio channel. `next_batch` blocks the calling thread and
/// must not be called from inside an async task; use [`MpscSource::recv_batch`] there.
#[derive(Debug)]
pub struct MpscSource {
    rx: mpsc::UnboundedReceiver<Vec<RpcObjectData>>,
}

/// A connected pair for a sender and receiver on different threads or tasks.
pub fn unbounded() -> (MpscSink, MpscSource) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MpscSink { tx }, MpscSource { rx })
}

impl BatchSink for MpscSink {
    fn send_batch(&mut self, batch: Vec<RpcObjectData>) -> Result<(), RpcError> {
        self.tx.send(batch).map_err(|_| RpcError::ChannelClosed)
    }
}

impl MpscSource {
    pub async fn recv_batch(&mut self) -> Result<Vec<RpcObjectData>, RpcError> {
        self.rx.recv().await.ok_or(RpcError::ChannelClosed)
    }
}

impl BatchSource for MpscSource {
    fn next_batch(&mut self) -> Result<Vec<RpcObjectData>, RpcError> {
        self.rx.blocking_recv().ok_or(RpcError::ChannelClosed)
    }
}

/// Writes each batch as a big-endian `u32` length followed by its bincode encoding.
pub struct FramedWriter<W: Write> {
    inner: W,
}

impl<W: Write> FramedWriter<W> {
    pub fn new(inner: W) -> Self {
        FramedWriter { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> BatchSink for FramedWriter<W> {
    fn send_batch(&mut self, batch: Vec<RpcObjectData>) -> Result<(), RpcError> {
        let frame = bincode::serialize(&batch)?;
        let len = u32::try_from(frame.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "frame larger than 4 GiB"))?;
        self.inner.write_all(&len.to_be_bytes())?;
        self.inner.write_all(&frame)?;
        self.inner.flush()?;
        Ok(())
    }
}

/// Largest frame [`FramedReader`] accepts unless configured otherwise.
pub const DEFAULT_MAX_FRAME: usize = 64 * 1024 * 1024;

/// Reads frames written by [`FramedWriter`], refusing any longer than `max_frame` bytes.
pub struct FramedReader<R: Read> {
    inner: R,
    max_frame: usize,
}

impl<R: Read> FramedReader<R> {
    pub fn new(inner: R) -> Self {
        FramedReader {
            inner,
            max_frame: DEFAULT_MAX_FRAME,
        }
    }

    pub fn with_max_frame(mut self, max_frame: usize) -> Self {
        self.max_frame = max_frame;
        self
    }
}

impl<R: Read> BatchSource for FramedReader<R> {
    fn next_batch(&mut self) -> Result<Vec<RpcObjectData>, RpcError> {
        let mut len = [0u8; 4];
        match self.inner.read_exact(&mut len) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Err(RpcError::ChannelClosed),
            Err(e) => return Err(e.into()),
        }
        let len = u32::from_be_bytes(len) as usize;
        if len > self.max_frame {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("frame of {} bytes exceeds the {} byte limit", len, self.max_frame),
            )
            .into());
        }
        let mut frame = vec![0u8; len];
        self.inner.read_exact(&mut frame)?;
        Ok(bincode::deserialize(&frame)?)
    }
}
