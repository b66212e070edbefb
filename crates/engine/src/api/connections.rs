//! Connection management for bridge WebSocket clients.
//!
//! Tracks connected bridges and the viewer each one speaks for.

use std::collections::HashMap;

use guildforms_domain::PlayerId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::use_cases::dialogs::Viewer;

/// Information about a connected bridge.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    /// Unique ID for this connection
    pub connection_id: Uuid,
    /// The viewer this connection speaks for (set by `Hello`)
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("Connection not found")]
    NotFound,
    #[error("Viewer {0} is already connected")]
    ViewerAlreadyConnected(PlayerId),
    #[error("Connection already identified as viewer {0}")]
    AlreadyIdentified(PlayerId),
}

/// Manages all active bridge connections.
pub struct ConnectionManager {
    connections: RwLock<HashMap<Uuid, ConnectionInfo>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new, not yet identified connection.
    pub async fn register(&self, connection_id: Uuid) {
        let info = ConnectionInfo {
            connection_id,
            viewer: None,
        };
        let mut connections = self.connections.write().await;
        connections.insert(connection_id, info);
        tracing::debug!(connection_id = %connection_id, "Connection registered");
    }

    /// Unregister a connection, returning what was known about it.
    pub async fn unregister(&self, connection_id: Uuid) -> Option<ConnectionInfo> {
        let mut connections = self.connections.write().await;
        let removed = connections.remove(&connection_id);
        if removed.is_some() {
            tracing::debug!(connection_id = %connection_id, "Connection unregistered");
        }
        removed
    }

    pub async fn get(&self, connection_id: Uuid) -> Option<ConnectionInfo> {
        let connections = self.connections.read().await;
        connections.get(&connection_id).cloned()
    }

    /// Bind a connection to the viewer it speaks for.
    ///
    /// A viewer is served by at most one connection. Repeating `Hello` for the
    /// same viewer only updates the locale.
    pub async fn identify(&self, connection_id: Uuid, viewer: Viewer) -> Result<(), ConnectionError> {
        let mut connections = self.connections.write().await;

        for (id, info) in connections.iter() {
            if *id != connection_id
                && info.viewer.as_ref().map(|v| v.id) == Some(viewer.id)
            {
                return Err(ConnectionError::ViewerAlreadyConnected(viewer.id));
            }
        }

        let info = connections
            .get_mut(&connection_id)
            .ok_or(ConnectionError::NotFound)?;
        if let Some(current) = &info.viewer {
            if current.id != viewer.id {
                return Err(ConnectionError::AlreadyIdentified(current.id));
            }
        }

        tracing::info!(
            connection_id = %connection_id,
            viewer_id = %viewer.id,
            locale = %viewer.locale,
            "Connection identified viewer"
        );
        info.viewer = Some(viewer);
        Ok(())
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use guildforms_domain::LocaleTag;

    use super::*;

    fn viewer(id: PlayerId) -> Viewer {
        Viewer::new(id, LocaleTag::english())
    }

    #[tokio::test]
    async fn register_identify_unregister() {
        let manager = ConnectionManager::new();
        let connection_id = Uuid::new_v4();
        let viewer_id = PlayerId::new();

        manager.register(connection_id).await;
        assert!(manager.get(connection_id).await.unwrap().viewer.is_none());

        manager
            .identify(connection_id, viewer(viewer_id))
            .await
            .unwrap();

        let info = manager.unregister(connection_id).await.unwrap();
        assert_eq!(info.viewer.map(|v| v.id), Some(viewer_id));
        assert_eq!(manager.connection_count().await, 0);
    }

    #[tokio::test]
    async fn viewer_cannot_be_served_twice() {
        let manager = ConnectionManager::new();
        let (first, second) = (Uuid::new_v4(), Uuid::new_v4());
        manager.register(first).await;
        manager.register(second).await;
        let viewer_id = PlayerId::new();

        manager.identify(first, viewer(viewer_id)).await.unwrap();
        let err = manager.identify(second, viewer(viewer_id)).await.unwrap_err();

        assert_eq!(err, ConnectionError::ViewerAlreadyConnected(viewer_id));
    }

    #[tokio::test]
    async fn connection_keeps_its_viewer() {
        let manager = ConnectionManager::new();
        let connection_id = Uuid::new_v4();
        manager.register(connection_id).await;
        let original = PlayerId::new();

        manager.identify(connection_id, viewer(original)).await.unwrap();
        // Same viewer again is fine.
        manager.identify(connection_id, viewer(original)).await.unwrap();
        let err = manager
            .identify(connection_id, viewer(PlayerId::new()))
            .await
            .unwrap_err();

        assert_eq!(err, ConnectionError::AlreadyIdentified(original));
    }

    #[tokio::test]
    async fn identify_unknown_connection_fails() {
        let manager = ConnectionManager::new();
        let err = manager
            .identify(Uuid::new_v4(), viewer(PlayerId::new()))
            .await
            .unwrap_err();
        assert_eq!(err, ConnectionError::NotFound);
    }
}
