use mathcast_core::VideoRequest;
use mathcast_scheduler::RequestQueue;

fn request(text: &str, priority: u8) -> VideoRequest {
    VideoRequest::builder(text).priority(priority).build().unwrap()
}

#[test]
fn higher_priority_dequeues_first() {
    let mut queue = RequestQueue::new();
    queue.enqueue(request("Explain topic b", 2));
    queue.enqueue(request("Explain topic a", 8));
    queue.enqueue(request("Explain topic c", 5));

    let order: Vec<String> = std::iter::from_fn(|| queue.dequeue())
        .map(|e| e.request().text().clone())
        .collect();
    assert_eq!(
        order,
        vec!["Explain topic a", "Explain topic c", "Explain topic b"]
    );
}

#[test]
fn equal_priority_is_fifo() {
    let mut queue = RequestQueue::new();
    let first = queue.enqueue(request("Explain topic one", 3));
    let second = queue.enqueue(request("Explain topic two", 3));
    let third = queue.enqueue(request("Explain topic three", 3));

    assert_eq!(*queue.dequeue().unwrap().id(), first);
    assert_eq!(*queue.dequeue().unwrap().id(), second);
    assert_eq!(*queue.dequeue().unwrap().id(), third);
}

#[test]
fn ids_are_unique_and_monotonic() {
    let mut queue = RequestQueue::new();
    let a = queue.enqueue(request("Explain topic one", 0));
    let b = queue.enqueue(request("Explain topic two", 9));
    queue.dequeue();
    let c = queue.enqueue(request("Explain topic three", 0));
    assert!(a < b && b < c);
}

#[test]
fn peek_does_not_remove() {
    let mut queue = RequestQueue::new();
    queue.enqueue(request("Explain topic one", 4));
    assert_eq!(*queue.peek().unwrap().request().priority(), 4);
    assert_eq!(queue.len(), 1);
}

#[test]
fn remove_cancels_a_pending_request() {
    let mut queue = RequestQueue::new();
    let keep = queue.enqueue(request("Explain topic one", 1));
    let cancel = queue.enqueue(request("Explain topic two", 9));

    assert!(queue.remove(cancel));
    assert!(!queue.remove(cancel));
    assert_eq!(queue.len(), 1);
    assert_eq!(*queue.dequeue().unwrap().id(), keep);
}

#[test]
fn remove_preserves_ordering_of_the_rest() {
    let mut queue = RequestQueue::new();
    queue.enqueue(request("Explain topic low", 1));
    let mid = queue.enqueue(request("Explain topic mid", 5));
    queue.enqueue(request("Explain topic high", 9));

    queue.remove(mid);
    assert_eq!(queue.dequeue().unwrap().request().text(), "Explain topic high");
    assert_eq!(queue.dequeue().unwrap().request().text(), "Explain topic low");
}

#[test]
fn empty_queue_behaves() {
    let mut queue = RequestQueue::new();
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_none());
    assert!(queue.peek().is_none());
    assert!(!queue.remove(0));
}
