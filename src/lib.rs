//! Synthesis — a multi-persona LLM pipeline engine.
//!
//! Two pipelines over a local Ollama chat endpoint: a three-stage sequential
//! debate (Optimist → Critic → Realist) and a three-way concurrent document
//! analysis (Explicator / Visionary / Practitioner). Large documents are made
//! safe for a bounded context window by a map-reduce condenser that chunks,
//! summarizes concurrently, and rejoins in original order.
//!
//! See `DESIGN.md` for full architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod agent;
pub mod condense;
pub mod config;
pub mod document;
pub mod extract;
pub mod logging;
pub mod personas;
pub mod pipeline;
pub mod providers;
