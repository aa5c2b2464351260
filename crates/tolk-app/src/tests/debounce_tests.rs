use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::{sleep, timeout};

use crate::debounce::Debouncer;

fn counting(counter: &Arc<AtomicUsize>, value: usize) -> impl Future<Output = ()> + Send + 'static {
    let counter = counter.clone();
    async move {
        counter.fetch_add(value, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn only_the_last_task_runs() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(30));

    debouncer.schedule(counting(&counter, 1));
    debouncer.schedule(counting(&counter, 10));
    debouncer.schedule(counting(&counter, 100));

    sleep(Duration::from_millis(120)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 100);
}

#[tokio::test]
async fn task_waits_for_quiet_period() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(100));

    debouncer.schedule(counting(&counter, 1));
    sleep(Duration::from_millis(20)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancel_drops_pending_task() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(30));

    debouncer.schedule(counting(&counter, 1));
    debouncer.cancel();

    sleep(Duration::from_millis(100)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn returned_token_cancels() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(30));

    let token = debouncer.schedule(counting(&counter, 1));
    token.cancel();

    sleep(Duration::from_millis(100)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn flush_runs_pending_task_now() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_secs(60));

    debouncer.schedule(counting(&counter, 1));
    let handle = debouncer.flush().expect("pending task");

    timeout(Duration::from_secs(1), handle)
        .await
        .expect("flushed task did not finish")
        .unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert!(debouncer.flush().is_none());
}

#[tokio::test]
async fn drop_cancels_pending_task() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut debouncer = Debouncer::new(Duration::from_millis(30));
        debouncer.schedule(counting(&counter, 1));
    }

    sleep(Duration::from_millis(100)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}
