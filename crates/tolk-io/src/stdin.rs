use std::io::{self, BufRead};
use std::thread;

use kanal::{AsyncReceiver, Sender};

/// Read standard input line by line on a dedicated thread.
///
/// The receiver reports closed once stdin hits EOF. The thread is detached so a
/// pending blocking read never holds up process exit.
pub fn spawn_stdin_reader(capacity: usize) -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(capacity);

    thread::spawn(move || {
        let stdin = io::stdin();
        if let Err(e) = forward_lines(stdin.lock(), &tx) {
            tracing::error!("Failed to read stdin: {e}");
        }
        tracing::debug!("Stdin reader stopping");
    });

    rx.to_async()
}

/// Send each line of `reader` until EOF or until the receiver is gone
pub fn forward_lines(reader: impl BufRead, tx: &Sender<String>) -> io::Result<()> {
    for line in reader.lines() {
        if tx.send(line?).is_err() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn forwards_each_line_in_order() {
        let (tx, rx) = kanal::unbounded();

        forward_lines(Cursor::new("hello\n:to de\n\nlast"), &tx).unwrap();

        let lines: Vec<String> = (0..4).map(|_| rx.recv().unwrap()).collect();
        assert_eq!(lines, vec!["hello", ":to de", "", "last"]);
    }

    #[test]
    fn stops_when_receiver_is_dropped() {
        let (tx, rx) = kanal::unbounded::<String>();
        drop(rx);

        assert!(forward_lines(Cursor::new("a\nb\n"), &tx).is_ok());
    }
}
