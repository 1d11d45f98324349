use futures::StreamExt;
use line_reader::lines;
use ntuple::{LineOutcome, Synonyms, Tuple, TupleExtractor, TupleSize};
use std::path::Path;

/// Everything the matching engine needs for one request.
pub struct Extracted {
    pub synonyms: Synonyms,
    pub tuples1: Vec<Tuple>,
    pub tuples2: Vec<Tuple>,
}

/// Read the synonym file and both documents concurrently.
pub async fn extract_all(
    synonyms_path: &Path,
    file1: &Path,
    file2: &Path,
    size: TupleSize,
) -> Extracted {
    let (synonyms, tuples1, tuples2) = tokio::join!(
        synonyms(synonyms_path),
        tuples(file1, size),
        tuples(file2, size)
    );

    Extracted {
        synonyms,
        tuples1,
        tuples2,
    }
}

pub async fn synonyms<P: AsRef<Path>>(path: P) -> Synonyms {
    let path = path.as_ref();
    let mut synonyms = Synonyms::new();

    for_each_line(path, |_, line| synonyms.push_line(line)).await;

    log::info!("There are {} synonym sets in {}", synonyms.len(), path.display());
    synonyms
}

pub async fn tuples<P: AsRef<Path>>(path: P, size: TupleSize) -> Vec<Tuple> {
    let path = path.as_ref();
    let mut extractor = TupleExtractor::new(size);

    for_each_line(path, |line_no, line| {
        if let LineOutcome::TooShort { words } = extractor.push_line(line) {
            log::warn!(
                "n is too large for {} (line {line_no} has {words} words, n = {size})",
                path.display()
            );
        }
    })
    .await;

    log::info!("There are {} tuples in {}", extractor.len(), path.display());
    extractor.finish()
}

/// Feed each line of `path` to `f` with its 1-based line number. Read errors
/// are logged and end the file early; lines already read are kept.
async fn for_each_line<F: FnMut(usize, &str)>(path: &Path, mut f: F) {
    let stream = match lines(path).await {
        Ok(stream) => stream,
        Err(err) => {
            log::error!("Unable to read {}: {err}", path.display());
            return;
        }
    };

    let mut stream = Box::pin(stream).enumerate();
    while let Some((i, line)) = stream.next().await {
        match line {
            Ok(line) => f(i + 1, line.as_str()),
            Err(err) => {
                log::error!("Stopped reading {} at line {}: {err}", path.display(), i + 1);
                break;
            }
        }
    }
}
