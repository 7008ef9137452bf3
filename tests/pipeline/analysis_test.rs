//! Analysis pipeline fan-out and failure-isolation tests.

use std::sync::Arc;

use synthesis::agent::PersonaAgent;
use synthesis::condense::{ChunkSummarizer, Condenser};
use synthesis::config::CondenseConfig;
use synthesis::document::{Document, DocumentOrigin};
use synthesis::pipeline::AnalysisPipeline;
use synthesis::providers::{ChatClient, ChatRequest};

use crate::stub::{persona_of, Reply, StubClient};

fn test_config() -> CondenseConfig {
    CondenseConfig {
        threshold_chars: 100,
        chunk_chars: 40,
        fallback_prefix_chars: 10,
        workers: 4,
    }
}

fn pipeline_with(
    reply: impl Fn(&ChatRequest) -> Reply + Send + Sync + 'static,
) -> (Arc<StubClient>, AnalysisPipeline) {
    let client = Arc::new(StubClient::new(reply));
    let dyn_client: Arc<dyn ChatClient> = client.clone();
    let agent = PersonaAgent::new(dyn_client);
    let config = test_config();
    let summarizer = ChunkSummarizer::new(agent.clone(), config.fallback_prefix_chars);
    let condenser = Condenser::new(summarizer, &config);
    (client, AnalysisPipeline::new(agent, condenser))
}

fn short_document() -> Document {
    Document {
        text: "a short paper about traffic flow".to_owned(),
        origin: DocumentOrigin::Upload,
    }
}

fn analysis_reply(request: &ChatRequest) -> Reply {
    match persona_of(request) {
        "explicator" => Reply::ok("plain explanation"),
        "visionary" => Reply::ok("bold implications"),
        "practitioner" => Reply::ok("do these three things"),
        "condenser" => Reply::ok("CONDENSED"),
        other => Reply::fail(&format!("unexpected persona: {other}")),
    }
}

#[tokio::test]
async fn all_personas_succeed() {
    let (client, pipeline) = pipeline_with(analysis_reply);
    let result = pipeline.run(&short_document()).await;

    assert_eq!(result.status, "success");
    assert_eq!(result.explicator, "plain explanation");
    assert_eq!(result.visionary, "bold implications");
    assert_eq!(result.practitioner, "do these three things");
    assert!(!result.condensed);
    assert_eq!(result.fallback_chunks, 0);
    assert_eq!(result.model, "stub-model");
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn failing_persona_is_isolated_to_its_slot() {
    let (_, pipeline) = pipeline_with(|request| match persona_of(request) {
        "visionary" => Reply::fail("connection refused"),
        other => analysis_reply_for(other),
    });
    let result = pipeline.run(&short_document()).await;

    assert_eq!(result.status, "partial");
    assert_eq!(result.explicator, "plain explanation");
    assert_eq!(result.practitioner, "do these three things");
    assert!(result.visionary.starts_with("ERROR:"));
    assert!(result.visionary.contains("visionary agent failed"));
    assert!(result.visionary.contains("connection refused"));
}

#[tokio::test]
async fn all_personas_failing_still_returns_slots() {
    let (_, pipeline) = pipeline_with(|_| Reply::fail("model not found"));
    let result = pipeline.run(&short_document()).await;

    assert_eq!(result.status, "error");
    assert!(result.explicator.starts_with("ERROR:"));
    assert!(result.visionary.starts_with("ERROR:"));
    assert!(result.practitioner.starts_with("ERROR:"));
}

#[tokio::test]
async fn large_document_is_condensed_before_analysis() {
    let (client, pipeline) = pipeline_with(analysis_reply);
    let document = Document {
        text: "z".repeat(150),
        origin: DocumentOrigin::Url("http://example.com/paper".to_owned()),
    };
    let result = pipeline.run(&document).await;

    assert!(result.condensed);
    assert_eq!(result.status, "success");

    // Every analysis persona received the condensed text, not the raw
    // document: 150 chars at chunk size 40 gives 4 chunks.
    let calls = client.calls();
    let condenser_calls = calls.iter().filter(|c| persona_of(c) == "condenser").count();
    assert_eq!(condenser_calls, 4);
    for call in calls.iter().filter(|c| persona_of(c) != "condenser") {
        assert!(call.user.contains("CONDENSED"));
        assert!(!call.user.contains("zzzz"));
    }
}

#[tokio::test]
async fn personas_see_identical_input() {
    let (client, pipeline) = pipeline_with(analysis_reply);
    pipeline.run(&short_document()).await;

    let calls = client.calls();
    let inputs: Vec<&str> = calls.iter().map(|c| c.user.as_str()).collect();
    assert_eq!(inputs.len(), 3);
    assert!(inputs.iter().all(|i| *i == inputs[0]));
    assert_eq!(inputs[0], "a short paper about traffic flow");
}

fn analysis_reply_for(persona: &str) -> Reply {
    match persona {
        "explicator" => Reply::ok("plain explanation"),
        "practitioner" => Reply::ok("do these three things"),
        "condenser" => Reply::ok("CONDENSED"),
        other => Reply::fail(&format!("unexpected persona: {other}")),
    }
}
