use crate::{
    error::Result,
    reddit::{FetchError, Submission},
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{ErrorKind, Write};
use tracing::{debug, info, warn};

/// A spinner on stderr counting emitted URLs. Invisible when stderr is not a terminal.
pub fn progress_bar(limit: u32, community: &str) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template(
        " [{elapsed_precise}] {prefix:<22} {pos:>4}/{len:<4} {msg} {spinner}",
    )?;
    let bar = ProgressBar::with_draw_target(Some(limit as u64), ProgressDrawTarget::stderr());
    bar.set_style(style);
    bar.set_prefix(format!("r/{community}"));
    bar.set_message("Retrieving top posts...");
    Ok(bar)
}

/// Write the URL of every submission to `out`, one per line, in arrival order.
///
/// Lines already written stay written when the listing fails part way; the writer is
/// flushed before the error is returned. A closed pipe ends the stream without error.
pub fn stream_urls<W, I>(out: &mut W, submissions: I, progress: &ProgressBar) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<Submission, FetchError>>,
{
    let mut printed = 0;
    for submission in submissions {
        let submission = match submission {
            Ok(submission) => submission,
            Err(err) => {
                progress.abandon_with_message("Failed");
                if let Err(flush_err) = flush(out) {
                    warn!(%flush_err, "could not flush output after fetch failure");
                }
                return Err(err.into());
            }
        };

        if let Err(err) = writeln!(out, "{}", submission.url) {
            if err.kind() == ErrorKind::BrokenPipe {
                debug!(printed, "output closed, stopping");
                progress.finish_and_clear();
                return Ok(printed);
            }
            return Err(err.into());
        }
        printed += 1;
        progress.inc(1);
    }

    flush(out)?;
    progress.finish_and_clear();
    info!(printed, "finished streaming");
    Ok(printed)
}

fn flush<W: Write>(out: &mut W) -> Result<()> {
    match out.flush() {
        Err(err) if err.kind() != ErrorKind::BrokenPipe => Err(err.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    fn submission(url: &str) -> Result<Submission, FetchError> {
        Ok(Submission { url: url.to_string(), ..Default::default() })
    }

    /// Records what was flushed separately from what was merely written.
    #[derive(Default)]
    struct RecordingWriter {
        pending: Vec<u8>,
        flushed: Vec<u8>,
    }

    impl Write for RecordingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.pending.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed.append(&mut self.pending);
            Ok(())
        }
    }

    /// Takes every write but refuses to flush.
    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::Other, "disk full"))
        }
    }

    /// Accepts `capacity` bytes, then behaves like a pipe whose reader went away.
    struct ClosingPipe {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for ClosingPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.capacity {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn urls_are_written_in_order_and_flushed() {
        let mut out = RecordingWriter::default();
        let submissions = vec![submission("u3"), submission("u1"), submission("u2"), submission("u1")];
        let printed = stream_urls(&mut out, submissions, &ProgressBar::hidden()).unwrap();

        assert_eq!(printed, 4);
        assert!(out.pending.is_empty());
        assert_eq!(String::from_utf8(out.flushed).unwrap(), "u3\nu1\nu2\nu1\n");
    }

    #[test]
    fn empty_listing_prints_nothing() {
        let mut out = RecordingWriter::default();
        let printed = stream_urls(&mut out, Vec::new(), &ProgressBar::hidden()).unwrap();
        assert_eq!(printed, 0);
        assert!(out.flushed.is_empty());
    }

    #[test]
    fn partial_output_survives_a_failure() {
        let mut out = RecordingWriter::default();
        let submissions = vec![
            submission("u1"),
            submission("u2"),
            Err(FetchError { community: "pics".to_string(), reason: "429 Too Many Requests".to_string() }),
            submission("u3"),
        ];
        let err = stream_urls(&mut out, submissions, &ProgressBar::hidden()).unwrap_err();

        assert!(matches!(err, Error::Fetch(ref fetch) if fetch.community == "pics"));
        assert_eq!(String::from_utf8(out.flushed).unwrap(), "u1\nu2\n");
    }

    #[test]
    fn fetch_failure_wins_over_flush_failure() {
        let mut out = UnflushableWriter(vec![]);
        let submissions = vec![
            submission("u1"),
            Err(FetchError { community: "pics".to_string(), reason: "timed out".to_string() }),
        ];
        let err = stream_urls(&mut out, submissions, &ProgressBar::hidden()).unwrap_err();

        assert!(matches!(err, Error::Fetch(ref fetch) if fetch.reason == "timed out"));
        assert_eq!(out.0, b"u1\n");
    }

    #[test]
    fn closed_pipe_stops_quietly() {
        let mut out = ClosingPipe { written: vec![], capacity: "u1\nu2\n".len() };
        let submissions = (1..=5).map(|i| submission(&format!("u{i}")));
        let printed = stream_urls(&mut out, submissions, &ProgressBar::hidden()).unwrap();

        assert_eq!(printed, 2);
        assert_eq!(out.written, b"u1\nu2\n");
    }

    #[test]
    fn progress_template_is_valid() {
        let bar = progress_bar(10, "foo+bar").unwrap();
        assert_eq!(bar.length(), Some(10));
        assert_eq!(bar.prefix(), "r/foo+bar");
    }
}
