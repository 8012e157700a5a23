use mathcast_core::VideoRequest;
use mathcast_server::{JobState, ServerState};

fn request(text: &str, priority: u8) -> VideoRequest {
    VideoRequest::builder(text).priority(priority).build().unwrap()
}

#[tokio::test]
async fn submitted_jobs_are_queued_and_dequeued() {
    let state = ServerState::new();
    let job = state.submit(request("Explain the chain rule", 0)).await;
    assert_eq!(job.state, JobState::Queued);

    let (job_id, req) = state.next_job().await.unwrap().unwrap();
    assert_eq!(job_id, job.id);
    assert_eq!(req.text(), "Explain the chain rule");
    assert!(state.next_job().await.unwrap().is_none());
}

#[tokio::test]
async fn higher_priority_jobs_dequeue_first() {
    let state = ServerState::new();
    let low = state.submit(request("Explain the chain rule", 1)).await;
    let high = state.submit(request("Prove the Pythagorean theorem", 9)).await;

    let (first, _) = state.next_job().await.unwrap().unwrap();
    let (second, _) = state.next_job().await.unwrap().unwrap();
    assert_eq!(first, high.id);
    assert_eq!(second, low.id);
}

#[tokio::test]
async fn dequeued_jobs_stay_in_the_registry() {
    let state = ServerState::new();
    let job = state.submit(request("Explain the chain rule", 0)).await;
    state.next_job().await.unwrap().unwrap();

    // The registry record outlives the queue entry.
    let stored = state.registry().get(job.id).await.unwrap();
    assert_eq!(stored.state, JobState::Queued);
    assert_eq!(state.registry().len().await, 1);
}

#[tokio::test]
async fn concurrent_submissions_never_lose_jobs() {
    let state = ServerState::new();

    let mut handles = Vec::new();
    for i in 0..16u8 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            state
                .submit(request("Explain the chain rule", i % 10))
                .await
                .id
        }));
    }
    let mut expected = Vec::new();
    for handle in handles {
        expected.push(handle.await.unwrap());
    }

    // Every dequeued entry resolves to its job; nothing is silently dropped.
    let mut seen = Vec::new();
    while let Some((job_id, _)) = state.next_job().await.unwrap() {
        seen.push(job_id);
    }
    expected.sort();
    seen.sort();
    assert_eq!(seen, expected);
}
