use crate::render;
use crate::tools::schemas::framework_quickstart::FrameworkQuickstartRequest;
use crate::tools::schemas::text;
use crate::tools::WebDevReferenceService;

pub(in crate::tools) fn framework_quickstart(
    service: &WebDevReferenceService,
    request: FrameworkQuickstartRequest,
) -> String {
    let framework = text(&request.framework);
    let package_manager = text(&request.package_manager);
    log::info!(
        "Providing quickstart for framework={framework} package_manager={package_manager}"
    );

    match service
        .catalog()
        .resolve_framework_starter(framework, package_manager)
    {
        Ok(plan) => render::render_quickstart(&plan),
        Err(err) => {
            log::debug!("framework_quickstart: {}: {err}", err.code());
            render::render_error(&err)
        }
    }
}
