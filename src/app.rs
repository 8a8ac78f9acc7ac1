use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crate::pipeline;
use crate::request::Request;

/// Terminal result of one submission, ready to be shown as a dialog.
#[derive(Debug)]
pub enum Outcome {
    Success(PathBuf),
    Failed(String),
}

/// Submission state machine, kept apart from the widgets so the
/// Idle -> Submitting -> (Success | Failed) -> Idle cycle can be tested
/// without a display.
pub struct Shell {
    job: Option<Receiver<Result<PathBuf>>>,
}

impl Shell {
    pub fn new() -> Self {
        Self { job: None }
    }

    /// True while a worker is running. The download button stays disabled
    /// for the duration, so at most one submission is in flight.
    pub fn submitting(&self) -> bool {
        self.job.is_some()
    }

    /// Validates the form and dispatches the pipeline on a worker thread.
    /// A validation error means nothing was dispatched.
    pub fn submit(&mut self, page_url: &str, directory: &str, file_name: &str) -> Result<()> {
        let request = Request::from_fields(page_url, directory, file_name)?;
        self.job = Some(pipeline::spawn(request));
        Ok(())
    }

    /// Polls the worker channel. Yields the outcome exactly once, when the
    /// worker finishes; the shell is idle again afterwards.
    pub fn poll(&mut self) -> Option<Outcome> {
        let job = self.job.as_ref()?;

        match job.try_recv() {
            Ok(Ok(path)) => {
                self.job = None;
                Some(Outcome::Success(path))
            }
            Ok(Err(e)) => {
                self.job = None;
                Some(Outcome::Failed(format!("{:#}", e)))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.job = None;
                Some(Outcome::Failed("Worker thread exited unexpectedly".to_string()))
            }
        }
    }
}

pub struct DownloaderApp {
    page_url: String,
    directory: String,
    file_name: String,
    shell: Shell,
}

impl Default for DownloaderApp {
    fn default() -> Self {
        Self {
            page_url: String::new(),
            directory: String::new(),
            file_name: String::new(),
            shell: Shell::new(),
        }
    }
}

impl eframe::App for DownloaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.shell.poll() {
            show_outcome(&outcome);
        }

        let submitting = self.shell.submitting();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Video URL:");
            ui.text_edit_singleline(&mut self.page_url);
            ui.add_space(8.0);

            ui.label("Download Path:");
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut self.directory);
                if ui.button("Browse").clicked() {
                    if let Some(path) = rfd::FileDialog::new().pick_folder() {
                        self.directory = path.display().to_string();
                    }
                }
            });
            ui.add_space(8.0);

            ui.label("Video Name:");
            ui.text_edit_singleline(&mut self.file_name);
            ui.add_space(12.0);

            let label = if submitting { "Please wait..." } else { "Download Video" };
            if ui
                .add_enabled(!submitting, egui::Button::new(label))
                .clicked()
            {
                if let Err(e) = self
                    .shell
                    .submit(&self.page_url, &self.directory, &self.file_name)
                {
                    show_warning(&format!("{:#}", e));
                }
            }
        });

        // try_recv only runs inside update, so keep repainting until the
        // worker reports back.
        if submitting {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn show_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Success(path) => {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Info)
                .set_title("Success")
                .set_description(format!(
                    "Video downloaded successfully to {}.",
                    path.display()
                ))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
        Outcome::Failed(message) => {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Error")
                .set_description(format!("An error occurred: {}", message))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
}

fn show_warning(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Warning")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::mpsc;

    fn shell_with_job() -> (mpsc::Sender<Result<PathBuf>>, Shell) {
        let (tx, rx) = mpsc::channel();
        (tx, Shell { job: Some(rx) })
    }

    #[test]
    fn test_submit_rejects_blank_fields_without_dispatch() {
        let mut shell = Shell::new();
        assert!(shell.submit("", "/tmp", "video").is_err());
        assert!(shell.submit("http://example.com", "  ", "video").is_err());
        assert!(!shell.submitting());
    }

    #[test]
    fn test_poll_is_quiet_while_worker_runs() {
        let (_tx, mut shell) = shell_with_job();
        assert!(shell.submitting());
        assert!(shell.poll().is_none());
        assert!(shell.submitting());
    }

    #[test]
    fn test_success_returns_shell_to_idle() {
        let (tx, mut shell) = shell_with_job();
        tx.send(Ok(PathBuf::from("/tmp/video.mp4"))).unwrap();

        match shell.poll() {
            Some(Outcome::Success(path)) => assert_eq!(path, PathBuf::from("/tmp/video.mp4")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!shell.submitting());
        assert!(shell.poll().is_none());
    }

    #[test]
    fn test_failure_carries_message_and_returns_to_idle() {
        let (tx, mut shell) = shell_with_job();
        tx.send(Err(anyhow!("Failed to fetch URL. Status code: 404")))
            .unwrap();

        match shell.poll() {
            Some(Outcome::Failed(message)) => assert!(message.contains("404")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!shell.submitting());
    }

    #[test]
    fn test_dropped_worker_reports_failure() {
        let (tx, mut shell) = shell_with_job();
        drop(tx);

        assert!(matches!(shell.poll(), Some(Outcome::Failed(_))));
        assert!(!shell.submitting());
    }
}
