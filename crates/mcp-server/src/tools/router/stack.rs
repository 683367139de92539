use crate::render;
use crate::tools::schemas::recommend_stack::RecommendStackRequest;
use crate::tools::schemas::text;
use crate::tools::WebDevReferenceService;

pub(in crate::tools) fn recommend_stack(
    service: &WebDevReferenceService,
    request: RecommendStackRequest,
) -> String {
    let project = text(&request.project);
    let experience = text(&request.experience);
    let realtime = text(&request.realtime);
    log::info!(
        "Recommending stack for project={project} experience={experience} realtime={realtime}"
    );

    match service
        .catalog()
        .select_stack_recipe(project, experience, realtime)
    {
        Ok(recommendation) => {
            log::debug!(
                "recommend_stack: matched recipe {}",
                recommendation.recipe_id.unwrap_or("<generic>")
            );
            render::render_stack(&recommendation)
        }
        Err(err) => render::render_error(&err),
    }
}
