//! readmegen - Generate structured README documents with an LLM pipeline
//!
//! Orchestrates generative-model calls to turn a repository URL, raw code,
//! or a free-text idea into a validated six-field README document, with an
//! expansion workflow for refining an existing document, code explanation,
//! and custom-section generation. Supports multiple LLM providers
//! (Anthropic, OpenAI, Ollama-compatible, Gemini).

pub mod cli;
pub mod config;
pub mod contracts;
pub mod document;
pub mod error;
pub mod llm;
pub mod ops;
pub mod pipeline;
pub mod prompts;
pub mod repo;
pub mod schema;
pub mod util;
