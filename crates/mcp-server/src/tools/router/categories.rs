use chrono::Utc;

use crate::render;
use crate::tools::schemas::list_tool_categories::ListToolCategoriesRequest;
use crate::tools::schemas::text;
use crate::tools::WebDevReferenceService;

pub(in crate::tools) fn list_tool_categories(
    service: &WebDevReferenceService,
    request: ListToolCategoriesRequest,
) -> String {
    let category = text(&request.category);
    log::info!("Listing tool categories for category={category}");

    match service.catalog().resolve_category(category) {
        Ok(listing) => render::render_category_listing(&listing, Utc::now()),
        Err(err) => {
            log::debug!("list_tool_categories: {}: {err}", err.code());
            render::render_error(&err)
        }
    }
}
