//! Shared rendering for the generator tools

use securegen::{BatchResult, CredentialGenerator, CredentialKind, GeneratorRequest, run_batch};
use tracing::debug;

use crate::tools::ToolResult;

fn icon(kind: CredentialKind) -> &'static str {
    match kind {
        CredentialKind::Uuid => "🔑",
        CredentialKind::Password => "🔐",
        CredentialKind::ApiKey => "🎫",
        CredentialKind::Token => "🎟️",
        CredentialKind::Pin => "🔢",
    }
}

fn label(kind: CredentialKind) -> &'static str {
    match kind {
        CredentialKind::Uuid => "UUID",
        CredentialKind::Password => "Password",
        CredentialKind::ApiKey => "API Key",
        CredentialKind::Token => "Token",
        CredentialKind::Pin => "PIN",
    }
}

/// Run `request` once, or `count` times through a batch
///
/// A single call that fails is a tool error. In a batch, failures are listed
/// in place and the result is still a success.
pub(crate) fn generate(request: &GeneratorRequest, count: usize) -> ToolResult {
    debug!(kind = %request.kind(), count, "render::generate: called");
    let mut generator = CredentialGenerator::new();

    if count == 1 {
        return match generator.generate(request) {
            Ok(credential) => ToolResult::success(format!(
                "{} {}: {}",
                icon(credential.kind()),
                label(credential.kind()),
                credential.value()
            )),
            Err(e) => ToolResult::error(e.to_string()),
        };
    }

    match run_batch(count, || generator.generate(request).map(|c| c.into_value())) {
        Ok(batch) => ToolResult::success(render_batch(request.kind(), &batch)),
        Err(e) => ToolResult::error(e.to_string()),
    }
}

/// Header line followed by one numbered line per slot
pub(crate) fn render_batch(kind: CredentialKind, batch: &BatchResult<String>) -> String {
    let mut lines = Vec::with_capacity(batch.len() + 1);
    lines.push(format!(
        "{} Generated {} {}(s):",
        icon(kind),
        batch.len(),
        kind.as_str().to_uppercase()
    ));
    for item in batch.iter() {
        match &item.outcome {
            Ok(value) => lines.push(format!("{}. {}", item.index, value)),
            Err(e) => lines.push(format!("{}. Error: {}", item.index, e.source)),
        }
    }
    lines.join("\n")
}
