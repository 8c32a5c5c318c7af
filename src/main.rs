use std::time::Duration;

use macroquad::prelude::*;
use tracing::info;

use life_canvas::{
    Camera, Engine, EngineConfig,
    input::{self, PointerState},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Canvas".to_owned(),
        window_width: 1400,
        window_height: 900,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let mut engine = Engine::new(EngineConfig::default());
    let mut camera = Camera::new();
    let mut pointer = PointerState::new();
    let (rows, cols) = engine.dimensions();
    info!(rows, cols, "life canvas started");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(engine.is_running());

        // Edits land between generations, never during one
        input::process_button_clicks(&mut engine, &buttons, mouse_pos);
        input::process_keyboard_input(&mut engine, &mut camera);
        input::handle_zoom(&mut engine);
        pointer.update(&mut engine, &mut camera, mouse_pos);

        engine.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(&engine, &camera);
        rendering::draw_controls(&engine, &buttons, mouse_pos);

        next_frame().await;
    }
}
