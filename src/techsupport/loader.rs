use itertools::Itertools;
use log::{debug, info, warn};
use responder::{DefaultResponsePool, ResponseTable};

use super::source::LineSource;
use crate::utils::unwrap_or_def_verbose;

/// Splits keyword data into `(keywords, response)` groups.
///
/// A non-empty (trimmed) line is a header when it contains a comma or has no spaces at all.
/// The header's comma separated keywords all map to the next line, taken verbatim.
/// Lines with several words and no comma are skipped. A header without a following line
/// is dropped.
///
/// Fragile: there is no escaping, so a response line is never checked for looking like
/// a header, and a single word meant as anything else becomes a keyword.
pub fn parse_keyword_groups<S: AsRef<str>>(
    lines: impl IntoIterator<Item = S>,
) -> Vec<(Vec<String>, String)> {
    let mut groups = Vec::new();
    let mut lines = lines.into_iter();
    while let Some(line) = lines.next() {
        let header = line.as_ref().trim();
        if header.is_empty() || !is_keyword_header(header) {
            continue;
        }
        let Some(response) = lines.next() else {
            warn!("Keywords {header:?} have no response line");
            break;
        };
        let keywords = header.split(',').map(|k| k.trim().to_string()).collect();
        groups.push((keywords, response.as_ref().to_string()));
    }
    groups
}

fn is_keyword_header(line: &str) -> bool {
    line.contains(',') || !line.contains(' ')
}

/// Joins runs of lines into multi-line responses, each line ending with a newline.
///
/// Blank lines before a response are skipped. A response ends at the first empty line;
/// whitespace-only lines inside a response are kept.
pub fn parse_default_responses<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut responses = Vec::new();
    let mut lines = lines.into_iter();
    while let Some(line) = lines.next() {
        let first = line.as_ref().trim();
        if first.is_empty() {
            continue;
        }
        let mut response = format!("{first}\n");
        for line in lines.by_ref() {
            let line = line.as_ref();
            if line.is_empty() {
                break;
            }
            response.push_str(line);
            response.push('\n');
        }
        responses.push(response);
    }
    responses
}

/// Unreadable source leaves the table empty.
pub fn load_response_table(source: &impl LineSource) -> ResponseTable {
    let lines = unwrap_or_def_verbose(source.read_lines());
    let table = ResponseTable::build(parse_keyword_groups(lines));
    if table.is_empty() {
        warn!("No keywords loaded from {source}");
    } else {
        info!("Loaded {} keywords from {source}", table.len());
    }
    for (keyword, response) in table.iter().sorted() {
        debug!("{keyword}: {response}");
    }
    table
}

/// Unreadable source leaves only the fallback response.
pub fn load_default_pool(source: &impl LineSource) -> DefaultResponsePool {
    let lines = unwrap_or_def_verbose(source.read_lines());
    let pool = DefaultResponsePool::build(parse_default_responses(lines));
    info!("Loaded {} default responses from {source}", pool.len());
    for (i, response) in pool.iter().enumerate() {
        debug!("{i}: {}", response.trim_end());
    }
    pool
}
