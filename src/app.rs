use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use eframe::egui;

use crate::contribute::{self, SubmitResult};
use crate::data::loader::{self, DataSource};
use crate::data::model::Catalog;
use crate::state::AppState;
use crate::ui::{UiAction, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Repaint cadence while a background worker is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct McmcAtlasApp {
    pub state: AppState,
    /// Pending catalog load, polled each frame.
    load_rx: Option<Receiver<Result<Catalog>>>,
    /// Pending contribution submission, polled each frame.
    submit_rx: Option<Receiver<SubmitResult>>,
}

impl McmcAtlasApp {
    /// Build the app and kick off the startup fetch.
    pub fn new(source: DataSource) -> Self {
        let load_rx = loader::spawn_load(source.clone());
        Self {
            state: AppState::new(source),
            load_rx: Some(load_rx),
            submit_rx: None,
        }
    }

    /// Fetch the catalog again from the current source.
    pub fn reload(&mut self) {
        self.state.begin_reload();
        self.load_rx = Some(loader::spawn_load(self.state.source.clone()));
    }

    /// Switch to a local data directory and load from it.
    pub fn open_folder(&mut self, dir: PathBuf) {
        self.state.source = DataSource::Local { dir };
        self.reload();
    }

    /// Hand the active draft to a submission worker.
    pub fn start_submit(&mut self) {
        if self.state.contribute.submitting || self.submit_rx.is_some() {
            return;
        }
        if let Some(draft) = self.state.contribute.active.clone() {
            self.state.contribute.submitting = true;
            self.submit_rx = Some(contribute::spawn_submit(
                contribute::CONTRIB_REPO.to_string(),
                draft,
            ));
        }
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.load_rx else { return };
        match rx.try_recv() {
            Ok(Ok(catalog)) => {
                if catalog.is_empty() {
                    log::warn!("catalog has no algorithm records");
                }
                log::info!(
                    "catalog ready: {} algorithms, {} packages",
                    catalog.algorithms.len(),
                    catalog.packages.len()
                );
                self.state.set_catalog(catalog);
                self.load_rx = None;
            }
            Ok(Err(err)) => {
                self.state
                    .set_load_failed(format!("Failed to load catalog: {err:#}"));
                self.load_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.state
                    .set_load_failed("Catalog loader stopped unexpectedly".to_string());
                self.load_rx = None;
            }
        }
    }

    fn poll_submit(&mut self) {
        let Some(rx) = &self.submit_rx else { return };
        match rx.try_recv() {
            Ok(Ok(submission)) => {
                self.state.contribute.finish_success(submission);
                self.submit_rx = None;
            }
            Ok(Err(err)) => {
                self.state.contribute.finish_failure(err);
                self.submit_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("submission worker stopped without a result");
                self.state.contribute.submitting = false;
                self.submit_rx = None;
            }
        }
    }
}

impl eframe::App for McmcAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        self.poll_submit();
        if self.load_rx.is_some() || self.submit_rx.is_some() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        let mut action: Option<UiAction> = None;

        // ---- Top panel: title, navigation, menu ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            if let Some(a) = panels::top_bar(ui, &mut self.state) {
                action = Some(a);
            }
        });

        // ---- Error banner directly under the top bar ----
        if self.state.error_banner.is_some() {
            egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
                panels::error_banner(ui, &mut self.state);
            });
        }

        // ---- Bottom status bar ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: the active section ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(a) = panels::central(ui, &mut self.state) {
                action = Some(a);
            }
        });

        // ---- Modals ----
        if let Some(a) = panels::modals(ctx, &mut self.state) {
            action = Some(a);
        }

        match action {
            Some(UiAction::OpenFolder(dir)) => self.open_folder(dir),
            Some(UiAction::Reload) => self.reload(),
            Some(UiAction::Submit) => self.start_submit(),
            None => {}
        }
    }
}
