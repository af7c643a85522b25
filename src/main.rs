use gridmap_view::config::Config;
use gridmap_view::render::canvas_size;
use gridmap_view::{Map, MapError};
use macroquad::prelude::*;
use macroquad::window::Conf;
use macroquad::Window;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line: `gridmap_view [MAP_FILE] [--details]`
struct Args {
    map_path: Option<String>,
    details: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = Args {
            map_path: None,
            details: false,
        };
        for arg in std::env::args().skip(1) {
            if arg == "--details" {
                args.details = true;
            } else if args.map_path.is_none() {
                args.map_path = Some(arg);
            }
        }
        args
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_map(config: &Config, args: &Args) -> Result<Map, MapError> {
    let path = args.map_path.as_deref().unwrap_or(&config.map.path);
    let mut map = Map::load(path)?;
    map.offset_x = config.view.offset_x;
    map.offset_y = config.view.offset_y;
    Ok(map)
}

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: config.view.window_title.clone(),
        ..Default::default()
    }
}

fn main() {
    let (config, source) = Config::load();
    init_logging(&config.logging.level);
    source.report();

    let args = Args::parse();
    let map = match load_map(&config, &args) {
        Ok(map) => map,
        Err(e) => {
            error!("could not load map: {}", e);
            std::process::exit(1);
        }
    };

    // Dump without opening a window
    if args.details {
        match serde_json::to_string_pretty(&map.details()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to serialize map details: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    Window::from_config(window_conf(&config), run(config, map));
}

async fn run(config: Config, map: Map) {
    map.print_details();

    let square = config.view.square;
    let (width, height) = canvas_size(&map, square);
    request_new_screen_size(width, height);
    info!(width, height, square, "opened canvas");

    let background = Color::from_rgba(
        config.view.background_r,
        config.view.background_g,
        config.view.background_b,
        255,
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(background);
        map.draw(square);

        next_frame().await
    }
}
