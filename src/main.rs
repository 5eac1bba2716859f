use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;

mod animation;
mod assets;
mod gauge;
mod highscore;
mod scenes;
mod sprite;
mod text;
mod timing;
mod trajectory;

use animation::AnimationConfig;
use assets::TextureStore;
use highscore::ScoreBoard;
use scenes::{ActionScene, MenuScene, SceneChange, ScoreScene};

// Screen resolution constants
const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;

/// Every texture the game uses, loaded up front by key
const TEXTURE_MANIFEST: &[(&str, &str)] = &[
    ("menu_bg", "assets/images/menu.png"),
    ("game_bg", "assets/images/arena.png"),
    ("score_bg", "assets/images/score.png"),
    ("button", "assets/images/button.png"),
    ("character_idle", "assets/images/character_idle.png"),
    ("character_attack", "assets/images/character_attack.png"),
    ("gauge", "assets/images/gauge.png"),
    ("sphere", "assets/images/sphere.png"),
];

/// The active screen. One variant at a time; transitions rebuild the target
/// scene so every round starts from fresh state.
enum Screen<'a> {
    Menu(MenuScene),
    Action(ActionScene<'a>),
    Score(ScoreScene),
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Power Toss", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let textures = TextureStore::load_all(&texture_creator, TEXTURE_MANIFEST)?;

    let animation_config = AnimationConfig::load_from_file("assets/config/character_animations.json")
        .map_err(|e| format!("Failed to load character animation config: {}", e))?;

    let mut score_board = ScoreBoard::new(ScoreBoard::default_directory())
        .map_err(|e| format!("Failed to open score board: {}", e))?;
    if let Some(best) = score_board.best() {
        println!("Best score so far: {} ({})", best.score, best.achieved);
    }

    println!("Controls:");
    println!("Hold SPACE - Charge the gauge");
    println!("Release SPACE - Throw");
    println!("ESC - Quit");

    let mut screen = Screen::Menu(MenuScene::new());

    // Fixed timestep, ~60 FPS
    let delta_time = 1.0 / 60.0;

    'running: loop {
        let mut change = None;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                event => {
                    let requested = match &mut screen {
                        Screen::Menu(menu) => menu.handle_event(&event),
                        Screen::Action(action) => {
                            action.handle_event(&event);
                            None
                        }
                        Screen::Score(score) => score.handle_event(&event),
                    };
                    if requested.is_some() {
                        change = requested;
                    }
                }
            }
        }

        // Only the action scene has per-frame simulation; it can also
        // request the transition to the score screen.
        if let Screen::Action(action) = &mut screen {
            if let Some(requested) = action.update(delta_time) {
                change = Some(requested);
            }
        }

        if let Some(change) = change {
            screen = match change {
                SceneChange::Play => Screen::Action(ActionScene::new(&textures, &animation_config)?),
                SceneChange::ShowScore(result) => {
                    println!("Throw landed: multiplier {}", result.multiplier);
                    Screen::Score(ScoreScene::new(result, &mut score_board))
                }
            };
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        match &screen {
            Screen::Menu(menu) => menu.render(&mut canvas, &textures)?,
            Screen::Action(action) => action.render(&mut canvas, &textures)?,
            Screen::Score(score) => score.render(&mut canvas, &textures)?,
        }

        canvas.present();

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::gauge::Gauge;
    use crate::scenes::display_score;
    use crate::trajectory::{Point, Trajectory};

    #[test]
    fn test_charge_release_score_sequence() {
        // Hold ~300 ms: ticks fire at 0, 100 and 200 ms
        let mut gauge = Gauge::new();
        gauge.start();
        gauge.update(0.1);
        gauge.update(0.1);
        gauge.update(0.05);

        let multiplier = gauge.release();
        assert_eq!(multiplier, 3);
        assert_eq!(display_score(multiplier), 50);

        // The matching flight spans 330 pixels and lands 50 below
        let mut flight = Trajectory::launch(multiplier, Point::new(150.0, 450.0));
        flight.advance(1.0);
        assert_eq!(flight.position(), Point::new(480.0, 500.0));
    }

    #[test]
    fn test_new_round_starts_fresh() {
        // Re-entering the action scene builds a new gauge with no charge
        // left over from the previous round
        let mut gauge = Gauge::new();
        gauge.start();
        gauge.update(0.4);
        gauge.release();

        let fresh = Gauge::new();
        assert!(!fresh.is_charging());
        assert_eq!(fresh.displayed_frame(), 0);
    }
}
