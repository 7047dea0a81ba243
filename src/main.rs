use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use quiz_challenge::{
    draw, handle_key, logger, Controller, GameConfig, InputAction, QuestionBank, TimerEvent,
    UiState,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tokio::sync::mpsc::UnboundedReceiver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::from_env()?;
    logger::init(&config.log_file);
    logger::log("Starting quiz challenge");

    let bank = match &config.bank_file {
        Some(path) => QuestionBank::load(path)?,
        None => QuestionBank::builtin(),
    };
    let (mut controller, mut timer_rx) = Controller::with_channel(bank, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut controller, &mut timer_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    logger::log("Exiting quiz challenge");
    result?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut Controller,
    timer_rx: &mut UnboundedReceiver<TimerEvent>,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut ui = UiState::default();

    loop {
        terminal.draw(|f| draw(f, controller, &ui))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_key(controller, &mut ui, key) == InputAction::Quit {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(event) = timer_rx.recv() => controller.handle_timer_event(event),
        }
    }

    controller.go_home();
    Ok(())
}
