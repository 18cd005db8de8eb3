use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::conversations::TurnResult;
use crate::error::ApiError;
use crate::state::AppState;
use crate::utils::temp_audio::extension_hint;

/// Multipart field carrying the recorded utterance.
pub const AUDIO_FIELD: &str = "audio_file";

struct AudioUpload {
    bytes: Bytes,
    extension: String,
}

pub async fn read_root() -> Json<Value> {
    Json(json!({ "message": "TalkMate backend is running." }))
}

pub async fn process_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TurnResult>, ApiError> {
    let request_id = Uuid::new_v4();
    handle_turn(&state, multipart)
        .instrument(info_span!("turn", %request_id))
        .await
        .map(Json)
}

async fn handle_turn(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<TurnResult, ApiError> {
    let upload = match multipart {
        Ok(mut multipart) => {
            read_audio_upload(&mut multipart, &state.config.server.default_audio_extension).await
        }
        Err(rejection) => Err(rejection.into()),
    };
    let upload = upload.map_err(|err| {
        warn!("Rejected upload: {}", err);
        err
    })?;

    match state
        .processor
        .process_turn(&upload.bytes, &upload.extension)
        .await
    {
        Ok(result) => Ok(result),
        Err(err) => {
            error!(kind = err.kind(), details = ?err, "An error occurred in process_audio: {}", err);
            Err(err.into())
        }
    }
}

async fn read_audio_upload(
    multipart: &mut Multipart,
    default_extension: &str,
) -> Result<AudioUpload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }
        let extension = field
            .file_name()
            .and_then(extension_hint)
            .unwrap_or_else(|| default_extension.to_string());
        let bytes = field.bytes().await?;

        debug!("Received {} bytes of {} audio", bytes.len(), extension);
        return Ok(AudioUpload { bytes, extension });
    }
    Err(ApiError::missing_field(AUDIO_FIELD))
}
