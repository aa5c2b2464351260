use std::io::Cursor;
use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tolk_types::AppEvent;

use crate::io::watcher_io;

#[tokio::test]
async fn lines_from_sync_reader_become_events() {
    let (line_tx, line_rx) = kanal::bounded(8);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // Same path as the stdin thread: blocking reader, sync sender
    std::thread::spawn(move || {
        let input = Cursor::new("Hallo\n:to fr\n:bogus\n\n:swap\n");
        tolk_io::stdin::forward_lines(input, &line_tx).expect("read failed");
    });

    let watcher = tokio::spawn(watcher_io(line_rx.to_async(), tx, CancellationToken::new()));

    let mut events = Vec::new();
    loop {
        match timeout(Duration::from_secs(2), rx.recv()).await {
            Ok(Ok(AppEvent::Quit)) => break,
            Ok(Ok(event)) => events.push(event),
            Ok(Err(e)) => panic!("Channel error: {e}"),
            Err(_) => panic!("Timeout - input never closed"),
        }
    }

    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], AppEvent::TextInput(t) if t == "Hallo"));
    assert!(matches!(&events[1], AppEvent::SetTargetLanguage(code) if code == "fr"));
    assert!(matches!(&events[2], AppEvent::SwapLanguages));

    let result = timeout(Duration::from_secs(1), watcher).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn cancel_stops_watcher_without_quit() {
    let (_line_tx, line_rx) = kanal::bounded_async::<String>(8);
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let cancel = CancellationToken::new();

    let watcher = tokio::spawn(watcher_io(line_rx, tx, cancel.clone()));
    cancel.cancel();

    let result = timeout(Duration::from_secs(1), watcher).await.unwrap().unwrap();
    assert!(result.is_ok());
    assert!(!matches!(rx.try_recv(), Ok(Some(_))));
}
