use super::{check, UiThread};
use crate::args::{Args, CompareArgs};
use crate::config::{self, Config};
use crate::error::Result;
use crate::request::{MissingSynonymsErr, Request, RequestError, USAGE};
use crate::ui::{Message, Summary};
use std::path::Path;
use std::time::Instant;

pub async fn compare(args: &Args, compare_args: &CompareArgs) -> Result<()> {
    let config = config::from_path(args.config_path()).await?;
    let cwd = args.cwd();
    let config_dir = args.config_dir()?;
    let ui = UiThread::spawn(args, false);
    let mut summary = Summary::new(Instant::now());

    match build_request(compare_args, &config, &cwd, &config_dir) {
        Ok(request) => check(request, &mut summary, |m| ui.send(m)).await?,
        Err(err) => {
            log::debug!("Rejected request: {err:?}");
            summary.add_rejected();
            ui.send(Message::Usage(USAGE.to_string()))?;
        }
    }

    ui.finish(summary)
}

/// `--synonyms` wins over the configured synonym file; one of them is required.
fn build_request(
    compare_args: &CompareArgs,
    config: &Config,
    cwd: &Path,
    config_dir: &Path,
) -> std::result::Result<Request, RequestError> {
    let synonyms = compare_args
        .synonyms
        .as_ref()
        .map(|path| cwd.join(path))
        .or_else(|| config.synonyms(config_dir));

    let Some(synonyms) = synonyms else {
        log::error!("No synonym file given and none configured");
        return MissingSynonymsErr.fail();
    };

    let request = Request::new(
        synonyms,
        &compare_args.file1,
        &compare_args.file2,
        compare_args.tuple_size.as_deref(),
        config.tuple_size(),
    )?;

    Ok(request.resolve(cwd))
}
