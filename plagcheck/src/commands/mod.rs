mod check;
mod compare;
mod interactive;

pub use check::check;
pub use compare::compare;
pub use interactive::interactive;

use crate::args::{Args, Reporter};
use crate::error::{BrokenPipeErr, Result, UiPanickedErr};
use crate::ui::{AnsiReporter, JsonReporter, Message, Summary, Ui};
use snafu::prelude::*;
use std::sync::mpsc::{self, Sender};
use std::thread::{spawn, JoinHandle};

/// The printing thread and the channel feeding it.
struct UiThread {
    tx: Sender<Message>,
    handle: JoinHandle<Result<()>>,
}

impl UiThread {
    fn spawn(args: &Args, show_summary: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        let reporter: Box<dyn crate::ui::Reporter + Send> = match args.reporter {
            Reporter::Ansi => Box::new(AnsiReporter::new(show_summary)),
            Reporter::Json => Box::new(JsonReporter::new()),
        };
        let handle = spawn(move || Ui::new(rx, reporter).run());

        Self { tx, handle }
    }

    fn send(&self, message: Message) -> Result<()> {
        self.tx.send(message).context(BrokenPipeErr)
    }

    fn finish(self, mut summary: Summary) -> Result<()> {
        summary.mark_ended();
        self.send(Message::Finished(summary))?;
        self.handle.join().ok().context(UiPanickedErr)?
    }
}
