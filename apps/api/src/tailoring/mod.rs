// Resume tailoring: upload → extract → prompt → model → response.
// All LLM calls go through llm_client via the TailoringModel trait.

pub mod extractor;
pub mod handlers;
pub mod model;
pub mod prompts;
pub mod request;
pub mod upload;
