//! Upload widget state machine.
//!
//! [`UploadWidget`] owns everything the page shows: the pending files,
//! the notices and the current [`WidgetPhase`]. It has one method per
//! user or browser event and never touches the DOM or the network itself.
//!
//! ```text
//!   Idle ──accept(≥1 ok)──▶ Pending ──begin_submit──▶ Submitting
//!    ▲                         ▲                          │
//!    │                         └────── failure ───────────┤
//!    └──────────── success (page replaced) ───────────────┘
//! ```
//!
//! The network round trip is driven by [`submit`], which reaches the widget
//! through a [`WidgetCell`] so the same flow runs against a Leptos signal in
//! the browser and a `RefCell` in tests.

use std::cell::RefCell;

use crate::config::{WidgetConfig, GENERIC_FAILURE_MESSAGE};
use crate::format::format_file_size;
use crate::types::{
    FileHandle, FileRow, Notice, NoticeId, PendingFile, SelectionReport, ServerReply,
    SubmitOutcome, UploadResult, WidgetPhase,
};
use crate::validation::{partition_selection, rejection_message};

/// Sends a batch of pending files to the conversion server.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    /// Issue one request carrying every file; resolve with whatever the server answered.
    async fn send(&self, files: &[PendingFile<F>]) -> UploadResult<ServerReply>;
}

/// Shared, mutable access to a widget.
pub trait WidgetCell<F> {
    /// Run `f` against the widget. `None` when the widget no longer exists.
    fn with_widget<R>(&self, f: impl FnOnce(&mut UploadWidget<F>) -> R) -> Option<R>;
}

impl<F> WidgetCell<F> for RefCell<UploadWidget<F>> {
    fn with_widget<R>(&self, f: impl FnOnce(&mut UploadWidget<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Pending files, notices and phase of one upload widget.
#[derive(Clone, Debug)]
pub struct UploadWidget<F> {
    config: WidgetConfig,
    files: Vec<PendingFile<F>>,
    /// Newest first
    notices: Vec<Notice>,
    phase: WidgetPhase,
    next_notice: u64,
}

impl<F: FileHandle> UploadWidget<F> {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
            notices: Vec::new(),
            phase: WidgetPhase::Idle,
            next_notice: 0,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn phase(&self) -> WidgetPhase {
        self.phase
    }

    /// Pending files in selection order.
    pub fn files(&self) -> &[PendingFile<F>] {
        &self.files
    }

    /// Current notices, newest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Whether the convert button should be shown.
    pub fn submit_visible(&self) -> bool {
        !self.files.is_empty()
    }

    /// Whether the convert button accepts clicks.
    pub fn submit_enabled(&self) -> bool {
        self.phase != WidgetPhase::Submitting
    }

    /// Replace the pending files with the valid subset of `files`.
    ///
    /// Every rejected file raises its own notice. A selection made while a
    /// request is in flight still replaces the list but leaves the phase alone.
    pub fn accept<I>(&mut self, files: I) -> SelectionReport
    where
        I: IntoIterator<Item = F>,
    {
        let (accepted, rejected) = partition_selection(files, &self.config);

        let mut notices = Vec::with_capacity(rejected.len());
        for rejection in &rejected {
            log::warn!("Rejected {}: {}", rejection.name, rejection.reason);
            let message = rejection_message(rejection, &self.config);
            notices.push(self.push_notice(message));
        }

        self.files = accepted;
        if self.phase != WidgetPhase::Submitting {
            self.phase = self.idle_or_pending();
        }

        log::info!(
            "Selection: {} accepted, {} rejected",
            self.files.len(),
            rejected.len()
        );

        SelectionReport {
            accepted: self.files.len(),
            rejected,
            notices,
        }
    }

    /// Display rows for the pending files.
    pub fn rows(&self) -> Vec<FileRow> {
        self.files
            .iter()
            .map(|file| FileRow {
                name: file.name.clone(),
                size_label: format_file_size(file.size),
            })
            .collect()
    }

    /// Show a new notice on top of the existing ones.
    pub fn push_notice(&mut self, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_notice);
        self.next_notice += 1;
        self.notices.insert(0, Notice { id, message: message.into() });
        id
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    /// Enter [`WidgetPhase::Submitting`] and hand out the batch to send.
    ///
    /// Returns `None` when there is nothing to send or a request is already
    /// in flight; the caller must then not issue a request.
    pub fn begin_submit(&mut self) -> Option<Vec<PendingFile<F>>> {
        if self.phase == WidgetPhase::Submitting || self.files.is_empty() {
            return None;
        }
        self.phase = WidgetPhase::Submitting;
        log::info!("Submitting {} file(s)", self.files.len());
        Some(self.files.clone())
    }

    /// Apply the result of the request started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: UploadResult<ServerReply>) -> SubmitOutcome {
        match result {
            Ok(reply) if reply.is_success() => {
                log::info!("Conversion succeeded ({})", reply.status);
                self.files.clear();
                self.phase = WidgetPhase::Idle;
                SubmitOutcome::ReplacePage(reply.body)
            }
            Ok(reply) => {
                log::error!("Conversion failed ({}): {}", reply.status, reply.body);
                self.fail(reply.body)
            }
            Err(e) => {
                log::error!("Upload failed: {}", e);
                self.fail(GENERIC_FAILURE_MESSAGE.to_string())
            }
        }
    }

    fn fail(&mut self, message: String) -> SubmitOutcome {
        let id = self.push_notice(message);
        self.phase = self.idle_or_pending();
        SubmitOutcome::Failed(id)
    }

    fn idle_or_pending(&self) -> WidgetPhase {
        if self.files.is_empty() {
            WidgetPhase::Idle
        } else {
            WidgetPhase::Pending
        }
    }
}

impl<F: FileHandle> Default for UploadWidget<F> {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

/// Run one submission: guard, send, then apply the reply.
///
/// The widget is only borrowed on either side of the request, never across it.
pub async fn submit<F, C, T>(cell: &C, transport: &T) -> SubmitOutcome
where
    F: FileHandle,
    C: WidgetCell<F>,
    T: UploadTransport<F>,
{
    let Some(batch) = cell.with_widget(|widget| widget.begin_submit()).flatten() else {
        return SubmitOutcome::Skipped;
    };

    let result = transport.send(&batch).await;

    cell.with_widget(|widget| widget.finish_submit(result))
        .unwrap_or(SubmitOutcome::Skipped)
}
