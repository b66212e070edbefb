use super::*;

use std::{net::SocketAddr, time::Duration};

use axum::routing::get;
use tokio::net::TcpListener;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::memory::InMemoryServices;
use crate::test_fixtures::localizer;
use crate::use_cases::dialogs::DialogFactory;

pub(crate) type WsClient =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

pub(crate) const RECV_TIMEOUT: Duration = Duration::from_secs(2);

pub(crate) fn build_ws_state(services: Arc<InMemoryServices>) -> Arc<WsState> {
    let app = App::new(
        EngineConfig::default(),
        Arc::new(localizer()),
        DialogFactory::from_services(services),
    );
    Arc::new(WsState {
        app: Arc::new(app),
        connections: Arc::new(ConnectionManager::new()),
    })
}

pub(crate) async fn spawn_ws_server(
    state: Arc<WsState>,
) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = axum::Router::new().route("/ws", get(ws_handler).with_state(state));

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (addr, handle)
}

pub(crate) async fn ws_connect(addr: SocketAddr) -> WsClient {
    let url = format!("ws://{}/ws", addr);
    let (ws, _resp) = connect_async(url).await.unwrap();
    ws
}

pub(crate) async fn ws_send_client(ws: &mut WsClient, msg: &ClientMessage) {
    let json = serde_json::to_string(msg).unwrap();
    ws.send(WsMessage::Text(json.into())).await.unwrap();
}

pub(crate) async fn ws_send_raw(ws: &mut WsClient, text: &str) {
    ws.send(WsMessage::Text(text.to_string().into()))
        .await
        .unwrap();
}

pub(crate) async fn ws_recv_server(ws: &mut WsClient) -> ServerMessage {
    tokio::time::timeout(RECV_TIMEOUT, async {
        loop {
            let msg = ws.next().await.unwrap().unwrap();
            if let WsMessage::Text(text) = msg {
                return serde_json::from_str::<ServerMessage>(&text).unwrap();
            }
        }
    })
    .await
    .unwrap()
}

/// Receive a `ShowDialog`, returning its id and description.
pub(crate) async fn ws_recv_dialog(
    ws: &mut WsClient,
) -> (u64, guildforms_shared::DialogDescription) {
    match ws_recv_server(ws).await {
        ServerMessage::ShowDialog { dialog_id, dialog } => (dialog_id, dialog),
        other => panic!("expected ShowDialog, got {:?}", other),
    }
}
