use guildforms_domain::{LocaleTag, PlayerId};

use super::*;

pub(super) async fn handle_hello(
    state: &WsState,
    connection_id: Uuid,
    viewer_id: Uuid,
    locale: Option<String>,
) -> Option<ServerMessage> {
    let locale = resolve_locale(&state.app.config.default_locale, locale);
    let player_id = PlayerId::from_uuid(viewer_id);
    let viewer = Viewer::new(player_id, locale.clone());

    match state.connections.identify(connection_id, viewer).await {
        Ok(()) => {
            // A repeated Hello may change the locale of an already open session.
            state.app.sessions.update_locale(player_id, locale).await;
            None
        }
        Err(e) => {
            tracing::warn!(
                connection_id = %connection_id,
                viewer_id = %viewer_id,
                error = %e,
                "Hello rejected"
            );
            Some(error_response(ErrorCode::BadRequest, &e.to_string()))
        }
    }
}

/// The bridge's locale if it is a valid tag, else the server default.
fn resolve_locale(default: &LocaleTag, reported: Option<String>) -> LocaleTag {
    match reported {
        Some(tag) => LocaleTag::new(tag.as_str()).unwrap_or_else(|e| {
            tracing::warn!(locale = %tag, error = %e, "Invalid locale from bridge, using default");
            default.clone()
        }),
        None => default.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_invalid_locale_uses_default() {
        let default = LocaleTag::english();

        assert_eq!(resolve_locale(&default, None), default);
        assert_eq!(resolve_locale(&default, Some(String::new())), default);
        assert_eq!(resolve_locale(&default, Some("en US".to_string())), default);
        assert_eq!(
            resolve_locale(&default, Some("de_DE".to_string())).as_str(),
            "de-DE"
        );
    }
}
