//! Terminal reports for a failed run.
//!
//! A catalog that does not load carries every problem found in it, and each
//! problem becomes its own [`Report`] pointing into the catalog text. Any other
//! [`RagmapError`] turns into one report tagged with a `ragmap::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use ragmap::RagmapError;
use ragmap_catalog::error::{Diagnostic, Label};

const CONFIG_HELP: &str =
    "check the file passed with --config, ragmap/config.toml, or the user config directory";

/// One entry printed by the CLI when a run fails.
#[derive(Debug)]
pub enum Report<'a> {
    /// A catalog problem with its location in `text`.
    Catalog {
        diagnostic: &'a Diagnostic,
        text: &'a str,
    },
    /// Any failure that has no catalog location.
    Failure(&'a RagmapError),
}

/// Splits `err` into the reports shown to the user.
pub fn reports(err: &RagmapError) -> Vec<Report<'_>> {
    let RagmapError::Catalog { err: catalog_err, src } = err else {
        return vec![Report::Failure(err)];
    };

    catalog_err
        .diagnostics()
        .iter()
        .map(|diagnostic| Report::Catalog {
            diagnostic,
            text: src,
        })
        .collect()
}

fn failure_code(err: &RagmapError) -> Option<&'static str> {
    match err {
        RagmapError::Io(_) => Some("ragmap::io"),
        RagmapError::Catalog { .. } => None,
        RagmapError::Options(_) => Some("ragmap::options"),
        RagmapError::Config(_) => Some("ragmap::config"),
        RagmapError::Layout(_) => Some("ragmap::layout"),
        RagmapError::Export(_) => Some("ragmap::export"),
    }
}

fn labeled_span(label: &Label) -> LabeledSpan {
    let span = label.span();
    let at = SourceSpan::new(span.start().into(), span.len());
    let message = Some(label.message().to_string());

    if label.is_primary() {
        LabeledSpan::new_primary_with_span(message, at)
    } else {
        LabeledSpan::new_with_span(message, at)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Catalog { diagnostic, .. } => f.write_str(diagnostic.message()),
            Report::Failure(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Report::Catalog { .. } => None,
            Report::Failure(err) => std::error::Error::source(*err),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        match self {
            Report::Catalog { diagnostic, .. } => diagnostic
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Report::Failure(err) => {
                failure_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display>)
            }
        }
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        match self {
            Report::Catalog { diagnostic, .. } => diagnostic
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display + 'b>),
            Report::Failure(RagmapError::Config(_)) => Some(Box::new(CONFIG_HELP)),
            Report::Failure(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Report::Catalog { text, .. } => Some(text as &dyn SourceCode),
            Report::Failure(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Report::Catalog { diagnostic, .. } = self else {
            return None;
        };
        let labels = diagnostic.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(labeled_span)))
    }
}
