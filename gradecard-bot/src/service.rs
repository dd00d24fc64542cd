//! Lookup pipeline: resolve → fetch → parse → format.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::alias::AliasResolver;
use crate::error::LookupError;
use crate::parser::parse_gradecard;
use crate::portal::ResultSource;
use crate::report::{split_message, ResultReport, MAX_MESSAGE_LEN};

/// Holds the injected resolver and result source; shared read-only by every request.
#[derive(Clone)]
pub struct GradecardService {
    resolver: AliasResolver,
    source: Arc<dyn ResultSource>,
}

impl GradecardService {
    pub fn new(resolver: AliasResolver, source: Arc<dyn ResultSource>) -> Self {
        Self { resolver, source }
    }

    /// Runs one lookup for raw user input. Makes exactly one fetch when the input resolves.
    #[instrument(skip(self))]
    pub async fn lookup(&self, input: &str) -> Result<ResultReport, LookupError> {
        let enrollment = self.resolver.resolve(input)?;
        let html = self.source.fetch(enrollment).await?;
        let records = parse_gradecard(&html)?;
        info!(enrollment, records = records.len(), "Grade card parsed");
        Ok(ResultReport::new(records))
    }

    /// Messages to send back for `input`: the report in chunks, or one explanatory line.
    /// Never empty.
    pub async fn reply_messages(&self, input: &str) -> Vec<String> {
        let text = match self.lookup(input).await {
            Ok(report) => report.render(),
            Err(e) => {
                warn!(error = %e, "Lookup failed");
                e.user_message().to_string()
            }
        };
        split_message(&text, MAX_MESSAGE_LEN)
    }
}
