use crate::error::{Result, SerializeErr};
use ntuple::{MatchedPair, Overlap, TupleSize};
use nu_ansi_term::Color::{Blue, Green, Red, Yellow};
use serde::Serialize;
use snafu::prelude::*;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

#[derive(Debug, Serialize)]
pub struct Summary {
    compared: usize,
    undefined: usize,
    rejected: usize,
    #[serde(skip_serializing)]
    start_time: Instant,
    #[serde(skip_serializing)]
    end_time: Option<Instant>,
}

impl Summary {
    pub fn new(start_time: Instant) -> Self {
        Self {
            compared: 0,
            undefined: 0,
            rejected: 0,
            start_time,
            end_time: None,
        }
    }

    pub fn add_report(&mut self, report: &Report) {
        self.compared += 1;
        if report.overlap.ratio().is_none() {
            self.undefined += 1;
        }
    }

    pub fn add_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn mark_ended(&mut self) {
        self.end_time = Some(Instant::now());
    }

    fn duration(&self) -> Duration {
        self.end_time
            .unwrap_or_else(Instant::now)
            .duration_since(self.start_time)
    }
}

/// The outcome of one comparison.
#[derive(Debug, Serialize)]
pub struct Report {
    pub synonyms: String,
    pub file1: String,
    pub file2: String,
    pub tuple_size: TupleSize,
    pub overlap: Overlap,
}

impl Report {
    pub fn percentage(&self) -> Option<String> {
        self.overlap.ratio().map(format_percentage)
    }
}

#[derive(Serialize)]
struct JsonResult<'a> {
    synonyms: &'a str,
    file1: &'a str,
    file2: &'a str,
    tuple_size: TupleSize,
    matched: usize,
    total: usize,
    overlap: Option<f64>,
    pairs: &'a [MatchedPair],
}

impl<'a> From<&'a Report> for JsonResult<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            synonyms: &report.synonyms,
            file1: &report.file1,
            file2: &report.file2,
            tuple_size: report.tuple_size,
            matched: report.overlap.matched,
            total: report.overlap.total,
            overlap: report.overlap.ratio(),
            pairs: &report.overlap.pairs,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: Vec<JsonResult<'a>>,
    rejected: &'a [String],
    summary: &'a Summary,
}

#[derive(Debug)]
pub enum Message {
    Finished(Summary),
    Report(Report),
    Usage(String),
}

pub trait Reporter {
    fn on_message(&mut self, message: Message) -> Result<()>;
}

pub struct AnsiReporter {
    show_summary: bool,
}

impl AnsiReporter {
    pub fn new(show_summary: bool) -> Self {
        Self { show_summary }
    }
}

impl Reporter for AnsiReporter {
    fn on_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Report(report) => match report.percentage() {
                Some(percentage) => println!("{}", Blue.paint(percentage)),
                None => eprintln!(
                    "{}",
                    Red.paint(format!(
                        "Cannot compute overlap: {} has no {}-word tuples",
                        report.file2, report.tuple_size
                    ))
                ),
            },
            Message::Usage(usage) => eprintln!("{}", Red.paint(usage)),
            Message::Finished(summary) => {
                if self.show_summary {
                    print_summary(&summary);
                }
            }
        }

        Ok(())
    }
}

pub struct JsonReporter {
    reports: Vec<Report>,
    rejected: Vec<String>,
}

impl JsonReporter {
    pub fn new() -> Self {
        let reports = Vec::new();
        let rejected = Vec::new();

        Self { reports, rejected }
    }
}

impl Reporter for JsonReporter {
    fn on_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Report(report) => self.reports.push(report),
            Message::Usage(usage) => self.rejected.push(usage),
            Message::Finished(summary) => {
                let report = JsonReport {
                    results: self.reports.iter().map(JsonResult::from).collect(),
                    rejected: &self.rejected,
                    summary: &summary,
                };

                let serialized = serde_json::to_string(&report).context(SerializeErr)?;
                println!("{serialized}");
            }
        }

        Ok(())
    }
}

pub struct Ui {
    channel: Receiver<Message>,
    reporter: Box<dyn Reporter + Send>,
}

impl Ui {
    pub fn new(channel: Receiver<Message>, reporter: Box<dyn Reporter + Send>) -> Self {
        Self { channel, reporter }
    }

    /// Print messages until `Finished` arrives or every sender hangs up.
    pub fn run(mut self) -> Result<()> {
        for message in self.channel.iter() {
            let done = matches!(message, Message::Finished(_));
            self.reporter.on_message(message)?;

            if done {
                break;
            }
        }

        Ok(())
    }
}

/// Render a ratio the way the original tool did: two decimals and a spaced
/// percent sign.
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.2} %", ratio * 100.0)
}

fn print_summary(summary: &Summary) {
    let duration = format_duration(&summary.duration());

    println!();
    println!(
        "Compared {} pairs ({} undefined, {} rejected) in {}",
        Green.paint(summary.compared.to_string()),
        Yellow.paint(summary.undefined.to_string()),
        Red.paint(summary.rejected.to_string()),
        Blue.paint(duration)
    );
}

fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        let millis = duration.as_millis();
        format!("{}.{:03}s", millis / 1000, millis % 1000)
    }
}
