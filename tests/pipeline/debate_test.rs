//! Debate pipeline sequencing, abort semantics, and wire shape.

use std::sync::Arc;

use synthesis::agent::PersonaAgent;
use synthesis::pipeline::DebatePipeline;
use synthesis::providers::{ChatClient, ChatRequest};

use crate::stub::{persona_of, Reply, StubClient};

const OPTIMIST_CANNED: &str = "1. Build a drone network\n2. Launch a satellite\n";
const CRITIC_CANNED: &str = "- Regulatory approval is a nightmare\n- Battery life\n- Cost";
const REALIST_CANNED: &str = "Refined Plan: start with a single corridor pilot.";

fn canned_reply(request: &ChatRequest) -> Reply {
    match persona_of(request) {
        "optimist" => Reply::ok(OPTIMIST_CANNED),
        "critic" => Reply::ok(CRITIC_CANNED),
        "realist" => Reply::ok(REALIST_CANNED),
        other => Reply::fail(&format!("unexpected persona: {other}")),
    }
}

fn pipeline_with(
    reply: impl Fn(&ChatRequest) -> Reply + Send + Sync + 'static,
) -> (Arc<StubClient>, DebatePipeline) {
    let client = Arc::new(StubClient::new(reply));
    let dyn_client: Arc<dyn ChatClient> = client.clone();
    (client, DebatePipeline::new(PersonaAgent::new(dyn_client)))
}

#[tokio::test]
async fn end_to_end_debate_with_canned_responses() {
    let (client, pipeline) = pipeline_with(canned_reply);
    let result = pipeline
        .run("reduce urban traffic")
        .await
        .expect("debate should succeed");

    assert_eq!(result.status, "success");
    assert_eq!(result.optimist, OPTIMIST_CANNED.trim());
    assert_eq!(result.critic, CRITIC_CANNED.trim());
    assert_eq!(result.realist, REALIST_CANNED);
    assert_eq!(result.idea_to_refine, "Build a drone network");
    assert_eq!(result.model, "stub-model");

    // The Realist prompt must contain both the extracted idea and the
    // Critic's full output.
    let calls = client.calls();
    let realist_call = calls
        .iter()
        .find(|c| persona_of(c) == "realist")
        .expect("realist was invoked");
    assert!(realist_call.user.contains("Build a drone network"));
    assert!(realist_call.user.contains(CRITIC_CANNED.trim()));
    assert!(realist_call.user.contains("Original Problem: reduce urban traffic"));
}

#[tokio::test]
async fn stages_run_in_order_with_composite_prompts() {
    let (client, pipeline) = pipeline_with(canned_reply);
    pipeline.run("reduce urban traffic").await.expect("success");

    let calls = client.calls();
    let personas: Vec<&str> = calls.iter().map(persona_of).collect();
    assert_eq!(personas, vec!["optimist", "critic", "realist"]);

    assert_eq!(calls[0].user, "reduce urban traffic");
    assert!(calls[1].user.contains("Original Problem: reduce urban traffic"));
    assert!(calls[1].user.contains("Idea to Critique:\nBuild a drone network"));
    assert!(calls[2].user.contains("Original Idea:\nBuild a drone network"));
    assert!(calls[2].user.contains("Critic's Concerns:"));
}

#[tokio::test]
async fn critic_failure_aborts_before_realist() {
    let (client, pipeline) = pipeline_with(|request| match persona_of(request) {
        "optimist" => Reply::ok(OPTIMIST_CANNED),
        "critic" => Reply::fail("connection refused"),
        other => Reply::fail(&format!("unexpected persona: {other}")),
    });

    let err = pipeline
        .run("reduce urban traffic")
        .await
        .expect_err("critic failure should abort");

    assert_eq!(err.stage(), "Critic");
    let message = err.to_string();
    assert!(message.contains("Critic stage failed"));
    assert!(message.contains("critic agent failed (model stub-model)"));

    // No Realist call was attempted.
    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| persona_of(c) != "realist"));
}

#[tokio::test]
async fn optimist_failure_aborts_immediately() {
    let (client, pipeline) = pipeline_with(|_| Reply::fail("model not found"));
    let err = pipeline.run("any problem").await.expect_err("should abort");
    assert_eq!(err.stage(), "Optimist");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn result_serializes_with_camel_case_idea_field() {
    let (_, pipeline) = pipeline_with(canned_reply);
    let result = pipeline.run("reduce urban traffic").await.expect("success");
    let value = serde_json::to_value(&result).expect("serializes");

    assert_eq!(value["status"], "success");
    assert_eq!(value["ideaToRefine"], "Build a drone network");
    assert_eq!(value["model"], "stub-model");
    assert!(value["optimist"].is_string());
    assert!(value["critic"].is_string());
    assert!(value["realist"].is_string());
}

#[tokio::test]
async fn debate_sampling_follows_the_profiles() {
    let (client, pipeline) = pipeline_with(canned_reply);
    pipeline.run("reduce urban traffic").await.expect("success");

    let calls = client.calls();
    assert!((calls[0].options.temperature - 0.9).abs() < f32::EPSILON);
    assert!((calls[1].options.temperature - 0.6).abs() < f32::EPSILON);
    assert!((calls[2].options.temperature - 0.4).abs() < f32::EPSILON);
    assert!(calls
        .iter()
        .all(|c| (c.options.top_p - 0.9).abs() < f32::EPSILON));
}
