use futures::{Stream, TryStreamExt};
use std::{io::Result, path::Path};
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};
use tokio_stream::wrappers::LinesStream;

type LineResult = Result<String>;

/// Open `path` and stream its lines in order, without line terminators.
///
/// Opening errors are returned up front. A read error part-way through the file
/// is yielded as an item, so callers can keep the lines they already have.
pub async fn lines<P: AsRef<Path>>(path: P) -> Result<impl Stream<Item = LineResult>> {
    let file = File::open(path).await?;
    Ok(LinesStream::new(BufReader::new(file).lines()))
}

/// Read every line of `path`, failing if any part of the file can't be read.
pub async fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    lines(path).await?.try_collect().await
}
