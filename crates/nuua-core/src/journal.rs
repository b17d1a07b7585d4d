//! A small diagnostics collector. The emitter only ever appends to a
//! [`Journal`]; rendering reports to a terminal, file, or network sink is
//! left entirely to the host application (`nuua-cli` in this workspace).

use crate::error::CompileError;

#[derive(Debug, Clone, PartialEq)]
pub enum ReportType {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub report_type: ReportType,
    pub message: String,
}

/// Collects reports emitted over the lifetime of one compilation. Cheap to
/// construct; owned by whichever driver calls into `nuua-bytecode`.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    reports: Vec<Report>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.reports.push(Report {
            report_type: ReportType::Info,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.reports.push(Report {
            report_type: ReportType::Success,
            message: message.into(),
        });
    }

    pub fn error(&mut self, err: &CompileError) {
        self.reports.push(Report {
            report_type: ReportType::Error,
            message: err.to_string(),
        });
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(|r| r.report_type == ReportType::Error)
    }
}
