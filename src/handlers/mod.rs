pub mod health;
pub mod pages;
pub mod plants;

pub use health::health_handler;
pub use pages::{app_js_handler, garden_planner_handler, index_handler};
pub use plants::{get_plant_handler, list_plants_handler};
