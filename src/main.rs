mod audio;
mod components;
mod render;
mod state;
mod util;

use components::app::App;

fn main() {
    util::init_logger();
    log::info!("garden starting");
    yew::Renderer::<App>::new().render();
}
