use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use obrolan::{
    chat_view, config,
    errors::ObrolanResult,
    key_handlers::handle_chat_input,
    logging, ChatWidget,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> ObrolanResult<()> {
    dotenv::dotenv().ok();
    config::initialize_config()?;
    let config = config::get_config();
    let _logger = logging::init_logging(&config.log_level)?;
    log::info!("Starting obrolan against {}", config.backend_url);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let widget = Arc::new(Mutex::new(ChatWidget::new(config.backend_url)));
    let result = run(&mut terminal, &widget).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    widget: &Arc<Mutex<ChatWidget>>,
) -> ObrolanResult<()> {
    loop {
        {
            let mut guard = widget.lock().await;
            guard.status_indicator.update_spinner();
            terminal.draw(|f| chat_view::draw_chat(f, &mut guard))?;
            if guard.should_quit {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_chat_input(key, widget).await {
                    widget.lock().await.should_quit = true;
                }
            }
        }
    }
}
