use crate::error::Result;
use crate::extract::{extract_all, Extracted};
use crate::request::Request;
use crate::ui::{Message, Report, Summary};
use ntuple::{compute_overlap, Equivalence, Overlap, Tuple};

/// Run one comparison and hand its report to the UI.
pub async fn check<F>(request: Request, summary: &mut Summary, on_message: F) -> Result<()>
where
    F: Fn(Message) -> Result<()>,
{
    let Extracted {
        synonyms,
        tuples1,
        tuples2,
    } = extract_all(
        &request.synonyms,
        &request.file1,
        &request.file2,
        request.tuple_size,
    )
    .await;

    let overlap = compute_overlap(&tuples1, &tuples2, &synonyms);
    log_matches(&overlap, &tuples1, &tuples2);

    let report = Report {
        synonyms: request.synonyms.display().to_string(),
        file1: request.file1.display().to_string(),
        file2: request.file2.display().to_string(),
        tuple_size: request.tuple_size,
        overlap,
    };

    summary.add_report(&report);
    on_message(Message::Report(report))
}

fn log_matches(overlap: &Overlap, tuples1: &[Tuple], tuples2: &[Tuple]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    for pair in &overlap.pairs {
        let how = match pair.equivalence {
            Equivalence::Identical => "identical".to_string(),
            Equivalence::Synonym { set } => format!("synonym set {}", set + 1),
        };
        log::debug!(
            "[{}] and [{}] are matches ({how})",
            tuples1[pair.left],
            tuples2[pair.right]
        );
    }

    log::debug!("There are {} identical tuples", overlap.identical_count());
    log::debug!("There are {} matching tuples", overlap.matched);
}
