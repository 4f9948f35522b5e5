use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseSpec;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response: status line, `Content-Type`, `Content-Length`,
/// `Connection: close`, blank line, body.
pub fn serialize_response(resp: &ResponseSpec) -> Vec<u8> {
    let head = format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.reason_phrase(),
        resp.content_type,
        resp.body.len(),
    );

    let mut buf = Vec::with_capacity(head.len() + resp.body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(&resp.body);
    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &ResponseSpec) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the whole response. Failures are returned as-is, never retried.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
