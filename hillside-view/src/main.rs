use macroquad::prelude::*;

fn window_conf() -> Conf {
    let config = hillside_view_lib::load_config();
    Conf {
        window_title: "Cabin in the Hills".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    hillside_view_lib::run().await;
}
