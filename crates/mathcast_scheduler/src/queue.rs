//! The request queue and its ordering.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use mathcast_core::VideoRequest;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A request waiting in the queue, stamped at admission.
#[derive(Debug, Clone, Getters)]
pub struct QueuedRequest {
    /// Queue-assigned identifier, unique for the queue's lifetime
    id: u64,
    /// The validated request
    request: VideoRequest,
    /// Admission timestamp
    submitted_at: DateTime<Utc>,
}

impl QueuedRequest {
    fn new(id: u64, request: VideoRequest) -> Self {
        Self {
            id,
            request,
            submitted_at: Utc::now(),
        }
    }
}

impl PartialEq for QueuedRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QueuedRequest {}

impl Ord for QueuedRequest {
    /// Higher priority first, then earlier submission, then lower id.
    ///
    /// `BinaryHeap` is a max-heap, so "first out" must compare greatest:
    /// priority ascends, while timestamp and id are reversed.
    fn cmp(&self, other: &Self) -> Ordering {
        self.request
            .priority()
            .cmp(other.request.priority())
            .then_with(|| other.submitted_at.cmp(&self.submitted_at))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for QueuedRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of pending video requests.
///
/// Not internally synchronized; callers wanting shared access wrap it in a
/// lock, as the server does.
///
/// # Examples
///
/// ```
/// use mathcast_core::VideoRequest;
/// use mathcast_scheduler::RequestQueue;
///
/// let mut queue = RequestQueue::new();
/// queue.enqueue(
///     VideoRequest::builder("Explain the chain rule").priority(1).build().unwrap(),
/// );
/// queue.enqueue(
///     VideoRequest::builder("Prove the triangle inequality").priority(5).build().unwrap(),
/// );
///
/// let next = queue.dequeue().unwrap();
/// assert_eq!(*next.request().priority(), 5);
/// ```
#[derive(Debug, Default)]
pub struct RequestQueue {
    heap: BinaryHeap<QueuedRequest>,
    next_id: u64,
}

impl RequestQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a request and returns its queue-assigned id.
    pub fn enqueue(&mut self, request: VideoRequest) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, priority = request.priority(), "request enqueued");
        self.heap.push(QueuedRequest::new(id, request));
        id
    }

    /// Removes and returns the highest-ordered request, if any.
    pub fn dequeue(&mut self) -> Option<QueuedRequest> {
        let entry = self.heap.pop();
        if let Some(ref entry) = entry {
            tracing::debug!(id = entry.id(), "request dequeued");
        }
        entry
    }

    /// Returns the request that would be dequeued next without removing it.
    pub fn peek(&self) -> Option<&QueuedRequest> {
        self.heap.peek()
    }

    /// Removes the request with the given id, returning whether it was found.
    ///
    /// Linear in queue size: the heap is drained and rebuilt without the
    /// cancelled entry. Queues are small enough that this never matters.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.heap.len();
        let entries = std::mem::take(&mut self.heap);
        self.heap = entries.into_iter().filter(|e| e.id != id).collect();
        self.heap.len() < before
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no pending requests.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
