use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::Path;

use galaga::app::App;
use galaga::audio::AudioManager;
use galaga::clock::FrameClock;
use galaga::input::CrosstermInput;
use galaga::renderer::play_field;
use galaga::{Game, Settings, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))
            .wrap_err_with(|| format!("could not load settings from {path}"))?,
        None => Settings::default(),
    };

    logging::init(&settings.log_file);
    log::info!("starting {} at {} fps", settings.caption, settings.frame_rate);

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::info!("keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Key release events are only reported with enhancement enabled
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(settings, &mut terminal);

    // Cleanup
    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("game loop failed: {err:?}");
    }
    result
}

fn run(settings: Settings, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    // The play field is the terminal minus the controls line, in world units
    let area = terminal.size()?;
    let bounds = play_field(&settings, area.width, area.height);

    let audio = AudioManager::open_or_silent(&settings);
    let clock = FrameClock::new(settings.frame_rate);
    let game = Game::new(settings, bounds);

    App::new(
        game,
        Box::new(CrosstermInput::new()),
        audio,
        Box::new(clock),
    )
    .run(terminal)
}
