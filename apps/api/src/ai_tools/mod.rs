// AI developer tools: project recommendations, project timelines, learning paths.
// All provider traffic goes through llm_client; this module owns prompts, decoding and fallback.

pub mod capability;
pub mod fallback;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod prompts;
