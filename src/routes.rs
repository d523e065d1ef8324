// Route path constants - single source of truth for all paths

pub const INDEX: &str = "/";
pub const GARDEN_PLANNER: &str = "/garden-planner";
pub const APP_JS: &str = "/static/js/app.js";
pub const HEALTH: &str = "/health";
pub const PLANTS: &str = "/api/plants";
pub const PLANT_ITEM: &str = "/api/plants/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
