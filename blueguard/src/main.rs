//! A terminal login client for the BlueGuard access portal

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

use app::{App, Effect, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode, sync::Arc};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let config = config::Config::parse();

    // Logs go to a file; the terminal belongs to the UI.
    let log_dir = config.data_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let (log_writer, _log_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, "blueguard.log"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_writer)
                .with_ansi(false),
        )
        .init();

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, config.server()).await;
    ratatui::restore();
    res
}

/// Manage the lifecycle of the app
async fn run(mut terminal: DefaultTerminal, server: String) -> io::Result<ExitCode> {
    let mut app = App::new(server);
    let context = Arc::new(EffectContext::new());

    // We expect side-effectful behaviors (that is, network access) to take
    // place via async tasks. Once those tasks are done, we read their results
    // off of a channel. We keep track of outstanding effects so we can exit
    // cleanly.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::with_capacity(1);

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    // Start our event loop!
    loop {
        // First thing we do is wait for an event. This can be either external
        // input or the async result of an effect. This is an `Option<_>`
        // because we don't necessarily need to pay attention to every single
        // piece of external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        // Once we have an action, we send it to `app.handle` to get any next
        // effects, and spawn a task for each one.
        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                outstanding_effects.push(spawn_effect_task(
                    effect_tx.clone(),
                    Arc::clone(&context),
                    effect,
                ));
            }
        }

        // Now that we handled the event, we re-render to display any changes
        // the app cares about.
        terminal.draw(|frame| app.render(frame))?;

        // Prune finished effect tasks. This list should never be too long
        // (since we do this on every pass through the event loop) so a full
        // scan is fine.
        outstanding_effects.retain(|handle| !handle.is_finished());

        // Finally, if the app indicates that it should exit, we wait for all
        // outstanding effects to finish before exiting the loop with the
        // exit code from the app. An issued login request can't be cancelled;
        // at worst this waits out the transport.
        if let Some(code) = app.should_exit() {
            for effect in outstanding_effects.drain(..) {
                let _ = effect.await;
            }

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    context: Arc<EffectContext>,
    effect: Effect,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let next_action = effect.run(&context).await;

        // If the channel is closed we're shutting down, and it's fine to
        // drop the message.
        let _ = effect_tx.send(next_action);
    })
}
