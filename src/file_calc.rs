//! Reads the selected files one at a time, squares the number each one holds
//! and shows the result.

use shared::{calculate, parse_input, CalcError, Calculation, ComputationError, ElementIds};

use crate::{dom, error::UiError};

/// Something whose whole content can be read as text, possibly suspending.
#[allow(async_fn_in_trait)]
pub trait TextSource {
    fn name(&self) -> String;
    async fn text(&self) -> Result<String, CalcError>;
}

/// An output whose displayed text can be replaced.
pub trait TextTarget {
    fn set_text(&self, text: &str);
}

/// Processes `files` strictly in order. Every result overwrites `out`, so
/// after several files only the last one is visible. The first failure
/// stops processing and leaves `out` as the previous file left it.
///
/// Returns how many files were processed.
pub async fn calculate_files<S, T, F>(
    files: impl IntoIterator<Item = S>,
    calc: F,
    out: &T,
) -> Result<usize, CalcError>
where
    S: TextSource,
    T: TextTarget + ?Sized,
    F: Fn(f64) -> Result<f64, ComputationError>,
{
    let mut processed = 0;
    for file in files {
        log::debug!("reading {}", file.name());
        let text_content = file.text().await?;
        log::info!("text_content: {text_content}");
        let res = calc(parse_input(&text_content)?)?;
        log::info!("result: {res:?}");
        out.set_text(&Calculation::from(res).to_string());
        processed += 1;
    }
    Ok(processed)
}

/// Change handler of the file input.
pub async fn calculate_selected(ids: &ElementIds) -> Result<usize, UiError> {
    let input = dom::input_by_id(&ids.local_file)?;
    let files = dom::selected_files(&input);
    log::debug!("{} file(s) selected", files.len());
    let out = dom::element_by_id(&ids.calculation_result)?;
    Ok(calculate_files(files, calculate, &out).await?)
}
