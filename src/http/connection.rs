use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::access_log::{AccessLog, RequestLogRecord};
use crate::config::Config;
use crate::http::parser::{parse_request_line, ParseError, READ_BUFFER_SIZE};
use crate::http::request::ParsedRequest;
use crate::http::response::{ResponseSpec, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::static_files::error_page;
use crate::static_files::{PathResolver, ResolvedTarget};

/// Read-only state shared by every connection handler.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    pub resolver: PathResolver,
    pub error_placeholder: String,
    pub access_log: AccessLog,
}

impl HandlerContext {
    pub fn new(resolver: PathResolver, error_placeholder: impl Into<String>, access_log: AccessLog) -> Self {
        Self {
            resolver,
            error_placeholder: error_placeholder.into(),
            access_log,
        }
    }

    /// Builds the context from configuration, opening the access log file.
    pub async fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let access_log = match &cfg.access_log.path {
            Some(path) => AccessLog::open(path).await?,
            None => AccessLog::disabled(),
        };

        Ok(Self::new(
            PathResolver::new(cfg.static_files.document_root.clone()),
            cfg.static_files.error_page_placeholder.clone(),
            access_log,
        ))
    }

    async fn error_response(&self, status: StatusCode) -> ResponseSpec {
        let body = error_page::render(
            self.resolver.document_root(),
            &self.error_placeholder,
            status,
        )
        .await;
        ResponseSpec::error(status, body)
    }
}

pub enum ConnectionState {
    Reading,
    Parsing,
    Validating(ParsedRequest),
    Responding(ResolvedTarget),
    Writing(ResponseWriter),
    Closed,
}

/// Handles exactly one request on one connection, then closes it.
pub struct Connection<S = TcpStream> {
    stream: S,
    peer: SocketAddr,
    ctx: Arc<HandlerContext>,
    buffer: BytesMut,
    state: ConnectionState,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, ctx: Arc<HandlerContext>) -> Self {
        Self {
            stream,
            peer,
            ctx,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the state machine to `Closed`.
    ///
    /// Consumes the connection so the stream is dropped (and the socket
    /// closed) on every exit path, including transport errors.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => {
                    if self.read_once().await? == 0 {
                        tracing::debug!(peer = %self.peer, "Peer closed before sending a request");
                        ConnectionState::Closed
                    } else {
                        ConnectionState::Parsing
                    }
                }

                ConnectionState::Parsing => match parse_request_line(&self.buffer) {
                    Ok(request) => {
                        self.ctx
                            .access_log
                            .record(&RequestLogRecord::new(self.peer, &request))
                            .await;

                        if request.method.is_get() {
                            ConnectionState::Validating(request)
                        } else {
                            self.respond_error(StatusCode::MethodNotAllowed).await
                        }
                    }
                    Err(ParseError::Empty) => ConnectionState::Closed,
                    Err(ParseError::MalformedRequestLine) => {
                        self.respond_error(StatusCode::BadRequest).await
                    }
                },

                ConnectionState::Validating(request) => {
                    match self.ctx.resolver.resolve(&request.raw_path).await {
                        Ok(target) => ConnectionState::Responding(target),
                        Err(e) => {
                            tracing::debug!(peer = %self.peer, path = %request.raw_path, reason = ?e, "Rejected path");
                            self.respond_error(e.status()).await
                        }
                    }
                }

                ConnectionState::Responding(target) => match tokio::fs::read(&target.path).await {
                    Ok(body) => {
                        let response = ResponseSpec::ok(target.content_type, body);
                        ConnectionState::Writing(ResponseWriter::new(&response))
                    }
                    Err(e) => {
                        tracing::warn!(path = %target.path.display(), error = %e, "Failed to read file");
                        self.respond_error(StatusCode::InternalServerError).await
                    }
                },

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    let _ = self.stream.shutdown().await;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Single read of at most [`READ_BUFFER_SIZE`] bytes.
    async fn read_once(&mut self) -> anyhow::Result<usize> {
        self.buffer.resize(READ_BUFFER_SIZE, 0);
        let n = self.stream.read(&mut self.buffer[..]).await?;
        self.buffer.truncate(n);
        Ok(n)
    }

    async fn respond_error(&self, status: StatusCode) -> ConnectionState {
        tracing::debug!(peer = %self.peer, status = status.as_u16(), "Sending error response");
        let response = self.ctx.error_response(status).await;
        ConnectionState::Writing(ResponseWriter::new(&response))
    }
}
