mod app;
mod assets;
mod refresh;
mod state;

pub use app::run;
pub use assets::{load_image, resource_path, IMAGE_ASSET};
pub use refresh::Refresher;
