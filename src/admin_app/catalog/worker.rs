//! Background catalog worker
//!
//! Moves a [`CatalogController`] onto its own thread so the UI thread never
//! blocks on an HTTP call. The UI sends [`CatalogCommand`]s and polls
//! [`CatalogEvent`]s once per frame, the same way auth results are polled.
//! Commands are handled one at a time, in the order they were sent.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::admin_app::api::CatalogBackend;
use crate::admin_app::catalog::controller::{CatalogController, CatalogSnapshot};
use crate::admin_app::catalog::draft::ProductDraft;
use crate::shared::catalog::ProductId;

/// A user interaction forwarded to the controller
#[derive(Debug, Clone)]
pub enum CatalogCommand {
    Mount,
    Reload,
    BeginCreate,
    Edit(ProductId),
    /// Submit with the form fields typed in the UI; the edit target stays the
    /// controller's own
    Submit(ProductDraft),
    RequestDelete(ProductId),
    ConfirmDelete,
    CancelDelete,
    ToggleFilter(String),
    ClearFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Status-area message produced by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// State published after every handled command
#[derive(Debug, Clone)]
pub struct CatalogEvent {
    pub snapshot: CatalogSnapshot,
    pub notice: Option<Notice>,
}

/// Handle to the worker thread
pub struct CatalogWorker {
    commands: Sender<CatalogCommand>,
    events: Receiver<CatalogEvent>,
    handle: JoinHandle<()>,
    in_flight: usize,
}

impl CatalogWorker {
    pub fn spawn<B>(controller: CatalogController<B>) -> std::io::Result<Self>
    where
        B: CatalogBackend + Send + 'static,
    {
        let (command_tx, command_rx) = channel::<CatalogCommand>();
        let (event_tx, event_rx) = channel();

        let handle = std::thread::Builder::new()
            .name("catalog-worker".to_string())
            .spawn(move || {
                let mut controller = controller;
                for command in command_rx {
                    tracing::debug!("Handling catalog command: {:?}", command);
                    let notice = apply(&mut controller, command);
                    let event = CatalogEvent {
                        snapshot: controller.snapshot(),
                        notice,
                    };
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
                tracing::debug!("Catalog worker stopped");
            })?;

        Ok(Self {
            commands: command_tx,
            events: event_rx,
            handle,
            in_flight: 0,
        })
    }

    /// Queue a command. Returns false if the worker thread has exited.
    pub fn send(&mut self, command: CatalogCommand) -> bool {
        match self.commands.send(command) {
            Ok(()) => {
                self.in_flight += 1;
                true
            }
            Err(_) => {
                tracing::error!("Catalog worker is no longer running");
                false
            }
        }
    }

    /// Next published event, without blocking
    pub fn try_recv(&mut self) -> Option<CatalogEvent> {
        let event = self.events.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    /// Next published event, waiting up to `timeout`
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<CatalogEvent> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(event)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Whether any sent command has not been answered yet
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Close the command channel and wait for the thread to finish
    pub fn shutdown(self) {
        let Self {
            commands, handle, ..
        } = self;
        drop(commands);
        if handle.join().is_err() {
            tracing::error!("Catalog worker panicked");
        }
    }
}

/// Run one command against the controller and describe its outcome
pub fn apply<B: CatalogBackend>(
    controller: &mut CatalogController<B>,
    command: CatalogCommand,
) -> Option<Notice> {
    let result = match command {
        CatalogCommand::Mount => controller.mount().map(|_| None),
        CatalogCommand::Reload => controller.reload().map(|_| None),
        CatalogCommand::BeginCreate => {
            controller.begin_create();
            Ok(None)
        }
        CatalogCommand::Edit(id) => controller.edit(id).map(|_| None),
        CatalogCommand::Submit(draft) => {
            controller.draft_mut().copy_fields_from(&draft);
            controller
                .submit()
                .map(|outcome| Some(Notice::info(outcome.message())))
        }
        CatalogCommand::RequestDelete(id) => controller.request_delete(id).map(|_| None),
        CatalogCommand::CancelDelete => {
            controller.cancel_delete();
            Ok(None)
        }
        CatalogCommand::ConfirmDelete => controller
            .confirm_delete()
            .map(|deleted| deleted.map(|_| Notice::info("Product deleted!"))),
        CatalogCommand::ToggleFilter(name) => controller.toggle_filter(&name).map(|_| None),
        CatalogCommand::ClearFilter => {
            controller.clear_filter();
            Ok(None)
        }
    };

    match result {
        Ok(notice) => notice,
        Err(e) => Some(Notice::error(e.to_string())),
    }
}
