use webdev_catalog::flag_enabled;

use crate::render;
use crate::tools::schemas::fetch_tool_reference::FetchToolReferenceRequest;
use crate::tools::schemas::text;
use crate::tools::WebDevReferenceService;

const INCLUDE_STATUS_FLAGS: &[&str] = &["1", "true", "yes"];

pub(in crate::tools) async fn fetch_tool_reference(
    service: &WebDevReferenceService,
    request: FetchToolReferenceRequest,
) -> String {
    let tool = text(&request.tool);
    let include_status = text(&request.include_status);
    log::info!("Fetching tool reference for tool={tool} include_status={include_status}");

    let record = match service.catalog().resolve_tool(tool) {
        Ok(record) => record,
        Err(err) => {
            log::debug!("fetch_tool_reference: {}: {err}", err.code());
            return render::render_error(&err);
        }
    };

    let status = if flag_enabled(include_status, INCLUDE_STATUS_FLAGS) {
        Some(service.probe().probe(&record.homepage).await)
    } else {
        None
    };
    render::render_tool_reference(record, status.as_ref())
}
