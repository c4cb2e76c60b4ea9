use axum::{Json, extract::State};

use crate::middleware::ProviderCredential;
use crate::router::RelayState;
use crate::service::Resolution;
use crate::service::commands::{CommandTarget, classify};
use crate::types::responses::{CommandRequest, CommandResponse};

/// POST /commands: image commands typed into the desktop terminal.
pub async fn commands_handler(
    State(state): State<RelayState>,
    ProviderCredential(credential): ProviderCredential,
    Json(command): Json<CommandRequest>,
) -> Json<CommandResponse> {
    let (category, safe) = match classify(&command.kind) {
        CommandTarget::Image { category, safe } => (category, safe),
        CommandTarget::Unknown(name) => {
            return Json(CommandResponse::failed(format!("Unknown command: {name}")));
        }
    };

    let credential = state.credential_or_default(credential);
    let response = match state
        .resolver
        .resolve(&category, safe, credential.as_deref())
        .await
    {
        Resolution::Found(image) => CommandResponse {
            success: true,
            url: Some(image.url),
            message: format!("{category} from {}", image.provider),
        },
        Resolution::Exhausted => CommandResponse {
            success: false,
            url: Some(state.fallback_image.to_string()),
            message: format!("No provider could serve '{category}'"),
        },
        Resolution::NsfwDisabled => CommandResponse::failed("NSFW commands are disabled"),
    };
    Json(response)
}
