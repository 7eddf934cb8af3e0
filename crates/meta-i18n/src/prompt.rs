use std::io::{BufRead, Write};

/// Writes `question` and reads one line. Only `y` (any case) counts as yes;
/// anything else, including end of input, is no.
pub fn confirm(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> std::io::Result<bool> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut out = Vec::new();
        let yes = confirm(&mut Cursor::new(answer.as_bytes()), &mut out, "Continue? (y/n): ")
            .expect("in-memory io");
        (yes, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn accepts_only_y() {
        assert_eq!(ask("y\n"), (true, "Continue? (y/n): ".to_string()));
        assert!(ask("Y\r\n").0);
        assert!(ask("  y  \n").0);
        assert!(!ask("yes\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
    }
}
