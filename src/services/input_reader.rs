use std::io::Read;
use crate::enums::input_source::InputSource;
use crate::errors::{ErrlensError, ErrlensResult};

pub struct InputReader;

impl InputReader {
    /// Picks the text to analyze: arguments joined by single spaces, else the
    /// whole of `reader` when it is not an interactive terminal.
    pub fn acquire(args: &[String], mut reader: impl Read, is_terminal: bool) -> ErrlensResult<(InputSource, String)> {
        if !args.is_empty() {
            return Ok((InputSource::Arguments, args.join(" ")));
        }
        if is_terminal {
            return Ok((InputSource::None, String::new()));
        }

        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|e| ErrlensError::input_error(InputSource::Stdin.label(), &e.to_string()))?;

        // Logs are not always clean UTF-8; keep whatever is readable.
        let text = String::from_utf8_lossy(&buffer).into_owned();
        log::debug!("📥 Read {} bytes from stdin", buffer.len());
        Ok((InputSource::Stdin, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_arguments_take_precedence() {
        let args = vec!["Cannot".to_string(), "find".to_string(), "module".to_string()];
        let (source, text) = InputReader::acquire(&args, "ignored".as_bytes(), false).unwrap();
        assert_eq!(source, InputSource::Arguments);
        assert_eq!(text, "Cannot find module");
    }

    #[test]
    fn test_piped_input_read_to_end() {
        let (source, text) = InputReader::acquire(&[], "line one\nline two\n".as_bytes(), false).unwrap();
        assert_eq!(source, InputSource::Stdin);
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_interactive_terminal_gives_no_input() {
        let (source, text) = InputReader::acquire(&[], FailingReader, true).unwrap();
        assert_eq!(source, InputSource::None);
        assert!(text.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"Cannot find module 'x'\xff";
        let (_, text) = InputReader::acquire(&[], bytes, false).unwrap();
        assert!(text.starts_with("Cannot find module 'x'"));
    }

    #[test]
    fn test_read_failure_is_input_error() {
        let err = InputReader::acquire(&[], FailingReader, false).unwrap_err();
        assert!(matches!(err, ErrlensError::InputError { .. }));
    }
}
