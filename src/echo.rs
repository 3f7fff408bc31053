//! A TCP server that writes back whatever each client sends.
//!
//! Every accepted connection runs on its own task and shares nothing with the
//! others. A connection ends when the client closes its write half.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io;
use tokio::net::{TcpListener, TcpStream};

/// Pause after a failed accept so a persistent error (e.g. EMFILE) does not
/// spin the loop.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of incoming connections.
trait Accept {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// Bind `addr` and echo connections until the process is stopped.
pub async fn serve(addr: &str) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "echo server listening");
    run(listener).await
}

/// Accept loop over an already bound listener.
///
/// Accept errors are logged and the loop keeps going after a short pause.
pub async fn run(listener: TcpListener) -> io::Result<()> {
    accept_loop(listener).await
}

async fn accept_loop<A: Accept>(listener: A) -> io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                tokio::spawn(handle_connection(stream, peer));
            }
            Err(e) => {
                tracing::warn!(error = %e, "accept error");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}

async fn handle_connection(mut stream: TcpStream, peer: SocketAddr) {
    tracing::info!(%peer, "client connected");

    let (mut reader, mut writer) = stream.split();
    match io::copy(&mut reader, &mut writer).await {
        Ok(bytes) => tracing::info!(%peer, bytes, "client disconnected"),
        Err(e) => tracing::warn!(%peer, error = %e, "io error"),
    }
}
