use webdev_catalog::flag_enabled;

use crate::render;
use crate::tools::schemas::deployment_checklist::DeploymentChecklistRequest;
use crate::tools::schemas::text;
use crate::tools::WebDevReferenceService;

const PREVIEW_FLAGS: &[&str] = &["yes", "true", "1"];

pub(in crate::tools) fn deployment_checklist(
    service: &WebDevReferenceService,
    request: DeploymentChecklistRequest,
) -> String {
    let provider = text(&request.provider);
    let preview = text(&request.preview);
    let default_provider = service.config().default_provider.as_str();
    log::info!(
        "Fetching deployment checklist for provider={provider} preview={preview} default={default_provider}"
    );

    match service
        .catalog()
        .resolve_deployment_playbook(provider, default_provider)
    {
        Ok(playbook) => render::render_deployment(playbook, flag_enabled(preview, PREVIEW_FLAGS)),
        Err(err) => {
            log::debug!("deployment_checklist: {}: {err}", err.code());
            render::render_error(&err)
        }
    }
}
