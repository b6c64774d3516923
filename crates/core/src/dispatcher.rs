use tracing::{info, instrument, warn};

use crate::{
    client::TextGenerator,
    config::Credentials,
    error::DispatchError,
    parse::parse_response,
    prompt::build_prompt,
    types::{GenerationOptions, GenerationRequest, GenerationResult},
};

/// Turns a submission into one model call.
///
/// The credentials are handed in at construction and checked on every
/// dispatch before the generator is touched, so a missing or malformed key
/// never reaches the network.
pub struct PromptDispatcher<G> {
    generator: G,
    credentials: Credentials,
}

impl<G: TextGenerator> PromptDispatcher<G> {
    pub fn new(generator: G, credentials: Credentials) -> Self {
        Self {
            generator,
            credentials,
        }
    }

    #[instrument(skip_all, fields(provider = self.credentials.provider.name()))]
    pub async fn dispatch(
        &self,
        request: &GenerationRequest,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, DispatchError> {
        let secret = self.credentials.secret().inspect_err(|e| {
            warn!(error = %e, "Refusing to dispatch without a usable API key");
        })?;

        let prompt = build_prompt(request, options);
        let raw = self.generator.generate(&secret, &prompt).await?;
        let result = parse_response(&raw, options);

        info!(
            response_chars = raw.len(),
            titles = result.titles.len(),
            tags = result.tags.all.len(),
            thumbnail_ideas = result.thumbnail_ideas.len(),
            "Generation complete"
        );

        Ok(result)
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}
