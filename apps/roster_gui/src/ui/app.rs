//! App shell: load-state machine, event drain, and roster rendering.

use std::time::Duration;

use client_core::{Pager, AGE_THRESHOLD_YEARS};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::Employee;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

/// Window title and page heading.
pub fn roster_heading() -> String {
    format!("Employees Over {AGE_THRESHOLD_YEARS}")
}

#[derive(Debug)]
pub enum RosterLoadState {
    NotLoaded,
    Loading { request_id: u64 },
    Loaded(Vec<Employee>),
    Error(UiError),
}

pub struct RosterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    roster: RosterLoadState,
    pager: Pager,
    status: String,
    next_request_id: u64,
}

impl RosterApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            roster: RosterLoadState::NotLoaded,
            pager: Pager::new(0),
            status: "Starting backend worker...".to_string(),
            next_request_id: 0,
        };
        app.request_roster();
        app
    }

    // Tags the pending load with a fresh request id so replies to anything
    // else are ignored.
    fn request_roster(&mut self) {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadRoster { request_id },
            &mut self.status,
        );
        self.roster = if queued {
            RosterLoadState::Loading { request_id }
        } else {
            RosterLoadState::Error(UiError::startup(self.status.clone()))
        };
    }

    fn accepts(&self, request_id: u64) -> bool {
        matches!(
            self.roster,
            RosterLoadState::Loading { request_id: pending } if pending == request_id
        )
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(error) => {
                    self.status = format!("{} error: {}", error.label(), error.message());
                    if matches!(
                        self.roster,
                        RosterLoadState::NotLoaded | RosterLoadState::Loading { .. }
                    ) {
                        self.roster = RosterLoadState::Error(error);
                    }
                }
                UiEvent::RosterLoaded {
                    request_id,
                    employees,
                } => {
                    if !self.accepts(request_id) {
                        tracing::debug!(request_id, "roster: discarding stale fetch result");
                        continue;
                    }
                    self.pager = Pager::new(employees.len());
                    self.status = format!(
                        "Loaded {} employees over {AGE_THRESHOLD_YEARS}",
                        employees.len()
                    );
                    self.roster = RosterLoadState::Loaded(employees);
                }
                UiEvent::RosterLoadFailed { request_id, error } => {
                    if !self.accepts(request_id) {
                        tracing::debug!(request_id, "roster: discarding stale fetch failure");
                        continue;
                    }
                    self.status = format!("{} error: {}", error.label(), error.message());
                    self.roster = RosterLoadState::Error(error);
                }
            }
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.small(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(roster_heading());
            ui.add_space(8.0);

            let Self { roster, pager, .. } = self;
            match roster {
                RosterLoadState::NotLoaded | RosterLoadState::Loading { .. } => {
                    loading_placeholder(ui);
                }
                RosterLoadState::Error(error) => {
                    error_banner(ui, error);
                }
                RosterLoadState::Loaded(employees) if employees.is_empty() => {
                    empty_roster_notice(ui);
                }
                RosterLoadState::Loaded(employees) => {
                    roster_table(ui, pager.page_slice(employees));
                    ui.add_space(10.0);
                    pagination_controls(ui, pager);
                }
            }
        });

        // Worker replies arrive between frames; poll so they are drained
        // without user input.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn loading_placeholder(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Things are loading...");
    });
}

fn empty_roster_notice(ui: &mut egui::Ui) {
    let notice = format!("No employees over {AGE_THRESHOLD_YEARS} to show.");
    ui.label(egui::RichText::new(notice).weak());
}

fn error_banner(ui: &mut egui::Ui, error: &UiError) {
    ui.group(|ui| {
        ui.label(
            egui::RichText::new(format!("{} error", error.label()))
                .color(egui::Color32::from_rgb(220, 80, 80))
                .strong(),
        );
        ui.label(error.message());
    });
}

fn roster_table(ui: &mut egui::Ui, visible: &[Employee]) {
    egui::Grid::new("roster_table")
        .num_columns(3)
        .striped(true)
        .spacing([32.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Salary");
            ui.strong("Age");
            ui.end_row();

            for employee in visible {
                ui.label(&employee.employee_name);
                ui.label(format_salary(employee.salary));
                ui.label(employee.age.to_string());
                ui.end_row();
            }
        });
}

fn pagination_controls(ui: &mut egui::Ui, pager: &mut Pager) {
    if pager.total_pages() > 1 {
        ui.horizontal(|ui| {
            let prev = ui
                .add_enabled(pager.has_prev(), egui::Button::new("Previous"))
                .on_hover_text("Go to the previous page");
            if prev.clicked() {
                pager.prev_page();
            }

            for page in 1..=pager.total_pages() {
                let is_current = page == pager.current_page();
                let response = ui
                    .selectable_label(is_current, page.to_string())
                    .on_hover_text(format!("Go to page {page}"));
                if response.clicked() {
                    pager.go_to_page(page);
                }
            }

            let next = ui
                .add_enabled(pager.has_next(), egui::Button::new("Next"))
                .on_hover_text("Go to the next page");
            if next.clicked() {
                pager.next_page();
            }
        });
        ui.add_space(4.0);
    }

    ui.label(egui::RichText::new(pager.summary()).weak());
}

fn format_salary(salary: f64) -> String {
    let sign = if salary < 0.0 { "-" } else { "" };
    // `as` saturates: amounts past u64::MAX cents render capped, not wrapped.
    let total_cents = (salary.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;
    if cents == 0 {
        format!("{sign}${}", group_thousands(whole))
    } else {
        format!("{sign}${}.{cents:02}", group_thousands(whole))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
