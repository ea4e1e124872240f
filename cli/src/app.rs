use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use player::{PlayerError, SimulatedMediaStore, TransitionController};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::Args;
use crate::views::{player::PlayerView, View};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const INPUT_POLL: Duration = Duration::from_millis(100);

pub struct App {
    exit: bool,
    store: Arc<SimulatedMediaStore>,
    controller: Arc<TransitionController>,
    view: PlayerView,
}

impl App {
    /// Must be called inside the Tokio runtime that will drive [`App::run`]
    pub fn new(args: &Args) -> Result<Self, PlayerError> {
        let store = Arc::new(SimulatedMediaStore::new(args.simulation_config()));
        log::info!(
            "Simulated track: {:?}, load latency {:?}",
            store.config().duration,
            store.config().load_latency
        );

        let controller = Arc::new(
            TransitionController::builder()
                .with_config(args.controller_config())
                .build(store.clone())?,
        );
        let view = PlayerView::new(store.clone(), controller.clone(), args.track_info());

        Ok(Self {
            exit: false,
            store,
            controller,
            view,
        })
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<(), PlayerError> {
        let mut input = spawn_input_reader();
        let mut frames = tokio::time::interval(FRAME_INTERVAL);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();

        while !self.exit {
            terminal.draw(|frame| self.view.render(frame))?;

            tokio::select! {
                _ = frames.tick() => {
                    let now = Instant::now();
                    self.store.advance(now - last_tick);
                    last_tick = now;
                }
                event = input.recv() => match event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key(key_event);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.exit(),
                },
            }
        }

        // An accepted toggle always dispatches; let it land before leaving.
        self.controller.wait_idle().await;
        log::info!("Exiting with {:?}", self.controller.stats());
        Ok(())
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        if self.handle_shared_event(key_event) {
            return;
        }
        self.view.handle_input(key_event);
    }

    fn handle_shared_event(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.exit();
                true
            }
            _ => false,
        }
    }

    fn exit(&mut self) {
        self.exit = true;
    }
}

/// Terminal input blocks, so it is read on its own thread and forwarded to
/// the event loop
fn spawn_input_reader() -> mpsc::UnboundedReceiver<std::io::Result<Event>> {
    let (sender, receiver) = mpsc::unbounded_channel();

    thread::spawn(move || loop {
        match event::poll(INPUT_POLL) {
            Ok(true) => {
                let result = event::read();
                let failed = result.is_err();
                if sender.send(result).is_err() || failed {
                    break;
                }
            }
            Ok(false) => {
                if sender.is_closed() {
                    break;
                }
            }
            Err(e) => {
                let _ = sender.send(Err(e));
                break;
            }
        }
    });

    receiver
}
