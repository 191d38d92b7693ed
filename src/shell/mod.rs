//! Line-oriented front end for the application store.
//!
//! The shell stands where the counter, prime modal and favorite primes
//! screens would be: it turns input lines into [`AppAction`]s, keeps its
//! own view-local state (modal shown, lookup in flight), and renders the
//! store through an observer.
//!
//! [`AppAction`]: crate::app::AppAction

mod command;
mod render;
mod view;

pub use command::{Command, CommandError};
pub use render::HELP;
pub use view::{CounterViewState, PrimeAlert};

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::app::{
    app_store, AppState, AppStore, CounterAction, FavoritePrimesAction, PrimeModalAction,
};
use crate::primes::{is_prime, NthPrimeService};

pub const PROMPT: &str = "> ";

/// Output shared between the shell and its store observer.
pub type SharedOutput<W> = Arc<Mutex<W>>;

/// Results delivered to the shell loop from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    NthPrimeResolved { n: i64, prime: Option<i64> },
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<W: Write + 'static> {
    store: AppStore,
    view: CounterViewState,
    service: Arc<dyn NthPrimeService>,
    lookup_timeout: Duration,
    events_tx: mpsc::UnboundedSender<ShellEvent>,
    events_rx: mpsc::UnboundedReceiver<ShellEvent>,
    output: SharedOutput<W>,
}

impl<W: Write + 'static> Shell<W> {
    /// Create the store and subscribe the status line renderer.
    ///
    /// The status line is written once immediately and then after every
    /// dispatched action.
    pub fn new(
        initial_state: AppState,
        service: Arc<dyn NthPrimeService>,
        lookup_timeout: Duration,
        output: SharedOutput<W>,
    ) -> Self {
        let mut store = app_store(initial_state);
        let sink = Arc::clone(&output);
        store.subscribe(move |state: &AppState| {
            let mut out = sink.lock();
            let _ = writeln!(out, "{}", render::summary(state));
        });

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            store,
            view: CounterViewState::default(),
            service,
            lookup_timeout,
            events_tx,
            events_rx,
            output,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn view(&self) -> &CounterViewState {
        &self.view
    }

    /// Read commands from `input` until EOF or `quit`, interleaved with
    /// lookup results as they arrive.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        tracing::info!("shell started");
        let mut lines = input.lines();
        self.prompt();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    if !line.trim().is_empty() {
                        match line.parse::<Command>() {
                            Ok(command) => {
                                if self.handle_command(command) == Flow::Quit {
                                    break;
                                }
                            }
                            Err(e) => self.println(&format!("error: {e}")),
                        }
                    }
                    self.prompt();
                }
                Some(event) = self.events_rx.recv() => {
                    self.handle_event(event);
                    self.prompt();
                }
            }
        }

        tracing::info!("shell stopped");
        Ok(())
    }

    /// Apply one command. Lookups are spawned on the tokio runtime, so this
    /// must be called from within one.
    pub fn handle_command(&mut self, command: Command) -> Flow {
        tracing::debug!(?command, "shell command");
        match command {
            // The counter buttons sit behind the modal, so using them closes it.
            Command::Incr => {
                self.view.prime_modal_shown = false;
                self.store.send(CounterAction::IncrTapped.into());
            }
            Command::Decr => {
                self.view.prime_modal_shown = false;
                self.store.send(CounterAction::DecrTapped.into());
            }
            Command::OpenPrimeModal => {
                self.view.prime_modal_shown = true;
                self.println(&render::prime_modal(self.state()));
            }
            Command::CloseModal => self.view.prime_modal_shown = false,
            Command::Save => self.save_favorite_prime(),
            Command::Remove => self.remove_favorite_prime(),
            Command::NthPrime => self.request_nth_prime(),
            Command::Favorites => self.println(&render::favorites(self.state())),
            Command::Delete(indices) => self
                .store
                .send(FavoritePrimesAction::DeleteFavoritePrimes(indices).into()),
            Command::Feed => self.println(&render::feed(self.state())),
            Command::Dump => match serde_json::to_string_pretty(self.state()) {
                Ok(json) => self.println(&json),
                Err(e) => self.println(&format!("error: {e}")),
            },
            Command::Help => self.println(HELP),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Apply a background result to the view-local state.
    pub fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::NthPrimeResolved { n, prime } => {
                tracing::info!(n, ?prime, "nth prime lookup finished");
                self.view.nth_prime_in_flight = false;
                self.view.alert = prime.map(|prime| PrimeAlert { n, prime });
                self.println(&render::nth_prime_answer(n, prime));
            }
        }
    }

    /// Wait for the next background result.
    pub async fn next_event(&mut self) -> Option<ShellEvent> {
        self.events_rx.recv().await
    }

    fn save_favorite_prime(&mut self) {
        if let Some(refusal) = self.prime_modal_refusal() {
            self.println(&refusal);
            return;
        }
        let count = self.state().count;
        if self.state().is_favorite(count) {
            self.println(&format!("{count} is already a favorite prime"));
            return;
        }
        self.store.send(PrimeModalAction::SaveFavoritePrimeTapped.into());
        self.println(&render::prime_modal(self.state()));
    }

    fn remove_favorite_prime(&mut self) {
        if let Some(refusal) = self.prime_modal_refusal() {
            self.println(&refusal);
            return;
        }
        let count = self.state().count;
        if !self.state().is_favorite(count) {
            self.println(&format!("{count} is not a favorite prime"));
            return;
        }
        self.store.send(PrimeModalAction::RemoveFavoritePrimeTapped.into());
        self.println(&render::prime_modal(self.state()));
    }

    /// Save and remove are only offered inside the modal, for a prime count.
    fn prime_modal_refusal(&self) -> Option<String> {
        if !self.view.prime_modal_shown {
            return Some("open the prime modal first ('prime')".to_string());
        }
        let count = self.state().count;
        if !is_prime(count) {
            return Some(format!("{count} is not prime"));
        }
        None
    }

    fn request_nth_prime(&mut self) {
        if self.view.nth_prime_in_flight {
            self.println("a lookup is already running");
            return;
        }

        let n = self.state().count;
        self.view.nth_prime_in_flight = true;
        self.view.alert = None;
        self.println(&render::nth_prime_prompt(n));
        tracing::info!(n, "nth prime lookup started");

        let lookup = self.service.nth_prime(n);
        let timeout = self.lookup_timeout;
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let prime = match tokio::time::timeout(timeout, lookup).await {
                Ok(prime) => prime,
                Err(_) => {
                    tracing::warn!(n, ?timeout, "nth prime lookup timed out");
                    None
                }
            };
            let _ = events.send(ShellEvent::NthPrimeResolved { n, prime });
        });
    }

    fn println(&self, text: &str) {
        let mut out = self.output.lock();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    fn prompt(&self) {
        let mut out = self.output.lock();
        let _ = write!(out, "{PROMPT}");
        let _ = out.flush();
    }
}
