use super::Player;
use crate::PROMPT;
use crate::moves::Move;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::io::BufRead;
use std::io::Write;
use std::num::NonZeroUsize;

/// Line-oriented prompt over any reader and writer.
/// Used for piped stdin and for scripted input in tests.
pub struct Reader<R, W> {
    input: R,
    output: W,
    attempts: Option<NonZeroUsize>,
}

impl<R: BufRead, W: Write> Reader<R, W> {
    pub fn new(input: R, output: W, attempts: Option<NonZeroUsize>) -> Self {
        Self {
            input,
            output,
            attempts,
        }
    }

    fn ask(&mut self) -> anyhow::Result<Option<String>> {
        writeln!(self.output, "{}\n{}", PROMPT, Move::menu())?;
        self.output.flush()?;
        let ref mut bytes = Vec::new();
        match self.input.read_until(b'\n', bytes)? {
            0 => Ok(None),
            _ => Ok(Some(
                String::from_utf8_lossy(bytes)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            )),
        }
    }
}

impl<R: BufRead, W: Write> Player for Reader<R, W> {
    fn choose(&mut self) -> Option<Move> {
        let attempts = self.attempts;
        super::retry(attempts, || self.ask())
    }
}

impl<R, W> Debug for Reader<R, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reader")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> Reader<Cursor<String>, Vec<u8>> {
        Reader::new(Cursor::new(input.to_string()), Vec::new(), None)
    }

    #[test]
    fn reprompts_until_valid() {
        let ref mut player = reader("abc\n7\n0\n2\n1\n");
        assert!(player.choose() == Some(Move::Paper));
        let shown = String::from_utf8(player.output.clone()).unwrap();
        assert!(shown.matches(PROMPT).count() == 4);
        assert!(shown.contains("1. Rock\n2. Paper\n3. Scissors"));
        assert!(player.choose() == Some(Move::Rock));
    }

    #[test]
    fn reprompts_after_non_utf8_line() {
        let input = Cursor::new(b"\xff\xfe\n2\n".to_vec());
        let ref mut player = Reader::new(input, Vec::new(), None);
        assert!(player.choose() == Some(Move::Paper));
        let shown = String::from_utf8(player.output.clone()).unwrap();
        assert!(shown.matches(PROMPT).count() == 2);
    }

    #[test]
    fn accepts_crlf_and_padding() {
        let ref mut player = reader(" 3 \r\n");
        assert!(player.choose() == Some(Move::Scissors));
    }

    #[test]
    fn yields_none_when_closed() {
        let ref mut player = reader("");
        assert!(player.choose() == None);
        let ref mut player = reader("nope\n");
        assert!(player.choose() == None);
    }

    #[test]
    fn honors_attempt_cap() {
        let input = Cursor::new("4\n5\n6\n1\n".to_string());
        let ref mut player = Reader::new(input, Vec::new(), NonZeroUsize::new(3));
        assert!(player.choose() == None);
        assert!(player.choose() == Some(Move::Rock));
    }
}
