use crate::core::{LineSink, Storage};
use crate::utils::error::{PacerError, Result};
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|source| PacerError::FileAccess {
                path: path.to_string(),
                source,
            })
    }
}

/// Writes every emission to an async writer and flushes it straight away.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub type StdoutSink = WriterSink<tokio::io::Stdout>;

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> LineSink for WriterSink<W> {
    async fn emit(&mut self, chunk: &[u8]) -> Result<()> {
        self.writer
            .write_all(chunk)
            .await
            .map_err(PacerError::Output)?;
        self.writer.flush().await.map_err(PacerError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tempfile::TempDir;

    /// Keeps written bytes pending until flushed, like a buffered pipe.
    #[derive(Default)]
    struct FlushLog {
        pending: Vec<u8>,
        flushed: Vec<Vec<u8>>,
    }

    impl AsyncWrite for FlushLog {
        fn poll_write(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            self.pending.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            if !self.pending.is_empty() {
                let chunk = std::mem::take(&mut self.pending);
                self.flushed.push(chunk);
            }
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            self.poll_flush(cx)
        }
    }

    #[tokio::test]
    async fn test_local_storage_reads_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("feed.txt"), b"A\nB\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        assert_eq!(storage.read_file("feed.txt").await.unwrap(), b"A\nB\n");
    }

    #[tokio::test]
    async fn test_local_storage_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        match storage.read_file("nope.txt").await {
            Err(PacerError::FileAccess { path, source }) => {
                assert_eq!(path, "nope.txt");
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected FileAccess error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_writer_sink_writes_each_chunk() {
        let mock = tokio_test::io::Builder::new()
            .write(b"A\nB\n")
            .write(b"C\n")
            .build();

        let mut sink = WriterSink::new(mock);
        sink.emit(b"A\nB\n").await.unwrap();
        sink.emit(b"C\n").await.unwrap();
    }

    #[tokio::test]
    async fn test_writer_sink_flushes_before_returning() {
        let mut sink = WriterSink::new(FlushLog::default());

        sink.emit(b"A\nB\n").await.unwrap();
        {
            let log = &sink.writer;
            assert!(log.pending.is_empty());
            assert_eq!(log.flushed, vec![b"A\nB\n".to_vec()]);
        }

        sink.emit(b"C\n").await.unwrap();
        let log = sink.into_inner();
        assert!(log.pending.is_empty());
        assert_eq!(log.flushed, vec![b"A\nB\n".to_vec(), b"C\n".to_vec()]);
    }

    #[tokio::test]
    async fn test_writer_sink_reports_output_errors() {
        let mock = tokio_test::io::Builder::new()
            .write_error(std::io::Error::new(ErrorKind::BrokenPipe, "closed"))
            .build();

        let mut sink = WriterSink::new(mock);
        let err = sink.emit(b"A\n").await.unwrap_err();
        assert!(matches!(err, PacerError::Output(ref e) if e.kind() == ErrorKind::BrokenPipe));
    }
}
