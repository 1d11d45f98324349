use super::{check, UiThread};
use crate::args::Args;
use crate::config;
use crate::error::{IoErr, Result};
use crate::request::Request;
use crate::ui::{Message, Summary};
use ntuple::TupleSize;
use snafu::prelude::*;
use std::path::Path;
use std::time::Instant;
use tokio::io::{stdin, AsyncBufRead, AsyncBufReadExt, BufReader};

/// Answer `SYNONYMS FILE1 FILE2 [N]` requests from stdin, one per line, until
/// EOF. Malformed lines get the usage message and are otherwise ignored.
pub async fn interactive(args: &Args) -> Result<()> {
    let config = config::from_path(args.config_path()).await?;
    let cwd = args.cwd();
    let ui = UiThread::spawn(args, true);
    let mut summary = Summary::new(Instant::now());

    let input = BufReader::new(stdin());
    answer_requests(input, &cwd, config.tuple_size(), &mut summary, |m| ui.send(m)).await?;

    ui.finish(summary)
}

/// Run every request line of `input`. Bytes that aren't UTF-8 are replaced,
/// so such a line is rejected like any other malformed request. Only a failed
/// read ends the loop early.
async fn answer_requests<R, F>(
    mut input: R,
    cwd: &Path,
    default_size: TupleSize,
    summary: &mut Summary,
    on_message: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: Fn(Message) -> Result<()>,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context(IoErr { path: "stdin" })?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');

        match Request::parse(line, default_size) {
            Ok(request) => check(request.resolve(cwd), summary, &on_message).await?,
            Err(err) => {
                log::debug!("Rejected {line:?}: {err:?}");
                summary.add_rejected();
                on_message(Message::Usage(err.to_string()))?;
            }
        }
    }

    Ok(())
}
