//! TCP 서버 모드.
//! 접속마다 독립된 세션 태스크를 띄워 같은 REPL을 구동한다.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::application::ports::Session;
use crate::infrastructure::adapters::TcpSession;
use crate::interface::cli::{AppComposition, run_repl};

/// 주소에 바인드하고 Ctrl-C까지 접속을 받는다.
pub async fn serve(composition: Arc<AppComposition>, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind quiz server to {bind}"))?;
    let local = listener.local_addr()?;
    println!("quiz server listening on {local}");

    serve_listener(listener, composition, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await;
    Ok(())
}

/// `shutdown`이 끝날 때까지 접속을 받는다. 진행 중인 클라이언트 태스크는 기다리지 않는다.
pub async fn serve_listener(
    listener: TcpListener,
    composition: Arc<AppComposition>,
    shutdown: impl Future<Output = ()>,
) {
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    info!(%peer, "client connected");
                    let composition = Arc::clone(&composition);
                    tokio::spawn(async move {
                        let mut session = TcpSession::new(stream, peer);
                        run_repl(&composition, &mut session).await;
                        session.close().await;
                        info!(peer = %session.peer(), "client disconnected");
                    });
                }
                Err(err) => warn!(error = %err, "failed to accept connection"),
            },
            () = &mut shutdown => {
                info!("shutting down quiz server");
                break;
            }
        }
    }
}
