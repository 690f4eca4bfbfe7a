use blogview::app::{App, AppMessage};
use blogview::cli::{self, parse_args, CliCommand};
use blogview::logging::{default_log_path, init_logging};
use blogview::terminal::{setup_panic_hook, TerminalManager};
use blogview::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw check interval (~60fps).
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags are handled before any terminal or logging setup.
    let app_root = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", cli::version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", cli::usage());
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, cli::usage());
            std::process::exit(1);
        }
        CliCommand::RunTui { app_root } => app_root,
    };

    color_eyre::install()?;

    let config = cli::config_for(app_root);
    let log_path = config.log_path.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(config);
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(async {
        app.initialize();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!(state = app.state.label(), "exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height)
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    // Every sender is gone; nothing more can arrive.
                    None => message_rx = None,
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
