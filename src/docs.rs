use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::job::handler::list_jobs,
        crate::modules::job::handler::create_job,
        crate::modules::job::handler::get_job,
        crate::modules::preset::handler::list_presets,
        crate::modules::preset::handler::create_preset,
        crate::modules::preset::handler::get_preset,
    ),
    components(
        schemas(
            crate::modules::job::model::Job,
            crate::modules::job::dto::CreateJobRequest,
            crate::modules::preset::model::Preset,
            crate::modules::preset::dto::CreatePresetRequest,
        )
    ),
    tags(
        (name = "Jobs", description = "Transcoding jobs"),
        (name = "Presets", description = "Encoding presets")
    )
)]
pub struct ApiDoc;
