use crate::domain::model::FormEvent;
use crate::domain::ports::EventSource;
use crate::utils::error::{Result, TipError};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Reads one command per line from an async reader.
pub struct LineEventSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineEventSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> EventSource for LineEventSource<R> {
    async fn next_event(&mut self) -> Result<Option<FormEvent>> {
        while let Some(line) = self.lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return parse_command(line).map(Some);
        }
        Ok(None)
    }
}

fn invalid(line: &str, reason: impl Into<String>) -> TipError {
    TipError::InvalidCommand {
        line: line.to_string(),
        reason: reason.into(),
    }
}

/// Parse a single command line.
///
/// `bill <text>`, `tip <fraction>`, `tip <n>%`, `+`/`inc`, `-`/`dec`,
/// `done`/`submit`, `show`, `quit`/`exit`/`q`, or a JSON-encoded event.
pub fn parse_command(line: &str) -> Result<FormEvent> {
    if line.starts_with('{') {
        return serde_json::from_str(line).map_err(|e| invalid(line, e.to_string()));
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "bill" => Ok(FormEvent::BillTextChanged(rest.to_string())),
        "tip" => parse_tip(line, rest).map(FormEvent::SliderMoved),
        "+" | "inc" => Ok(FormEvent::SplitIncrement),
        "-" | "dec" => Ok(FormEvent::SplitDecrement),
        "done" | "submit" => Ok(FormEvent::SubmitBill),
        "show" => Ok(FormEvent::Show),
        "quit" | "exit" | "q" => Ok(FormEvent::Quit),
        other => Err(invalid(line, format!("unknown command '{}'", other))),
    }
}

fn parse_tip(line: &str, value: &str) -> Result<f64> {
    if value.is_empty() {
        return Err(invalid(line, "missing tip value"));
    }

    if let Some(percent) = value.strip_suffix('%') {
        let percent: u32 = percent
            .trim()
            .parse()
            .map_err(|_| invalid(line, "percentage must be a whole number"))?;
        if percent > 100 {
            return Err(invalid(line, "percentage must be between 0% and 100%"));
        }
        return Ok(f64::from(percent) / 100.0);
    }

    let fraction: f64 = value
        .parse()
        .map_err(|_| invalid(line, "tip must be a fraction or a percentage"))?;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(invalid(line, "fraction must be between 0 and 1"));
    }
    Ok(fraction)
}

/// Replays a fixed list of events.
#[derive(Debug, Clone, Default)]
pub struct ScriptEventSource {
    events: VecDeque<FormEvent>,
}

impl ScriptEventSource {
    pub fn new(events: impl IntoIterator<Item = FormEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl EventSource for ScriptEventSource {
    async fn next_event(&mut self) -> Result<Option<FormEvent>> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(
            parse_command("bill 42.50").unwrap(),
            FormEvent::BillTextChanged("42.50".to_string())
        );
        assert_eq!(
            parse_command("bill").unwrap(),
            FormEvent::BillTextChanged(String::new())
        );
        assert_eq!(parse_command("+").unwrap(), FormEvent::SplitIncrement);
        assert_eq!(parse_command("DEC").unwrap(), FormEvent::SplitDecrement);
        assert_eq!(parse_command("done").unwrap(), FormEvent::SubmitBill);
        assert_eq!(parse_command("show").unwrap(), FormEvent::Show);
        assert_eq!(parse_command("q").unwrap(), FormEvent::Quit);
    }

    #[test]
    fn test_parse_tip_forms() {
        assert_eq!(parse_command("tip 0.18").unwrap(), FormEvent::SliderMoved(0.18));
        assert_eq!(parse_command("tip 25%").unwrap(), FormEvent::SliderMoved(0.25));
        assert_eq!(parse_command("tip 100%").unwrap(), FormEvent::SliderMoved(1.0));
        assert!(parse_command("tip").is_err());
        assert!(parse_command("tip 1.5").is_err());
        assert!(parse_command("tip 120%").is_err());
        assert!(parse_command("tip lots").is_err());
    }

    #[test]
    fn test_parse_json_event() {
        assert_eq!(
            parse_command(r#"{"event":"bill_text_changed","value":"12"}"#).unwrap(),
            FormEvent::BillTextChanged("12".to_string())
        );
        let err = parse_command(r#"{"event":"nope"}"#).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unknown_command_is_recoverable() {
        let err = parse_command("tipp 0.1").unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("tipp"));
    }

    #[tokio::test]
    async fn test_line_source_skips_blank_and_comment_lines() {
        let reader = tokio_test::io::Builder::new()
            .read(b"# split a dinner\n\nbill 100\n")
            .read(b"tip 18%\n+\n")
            .build();
        let mut source = LineEventSource::new(BufReader::new(reader));

        assert_eq!(
            source.next_event().await.unwrap(),
            Some(FormEvent::BillTextChanged("100".to_string()))
        );
        assert_eq!(
            source.next_event().await.unwrap(),
            Some(FormEvent::SliderMoved(0.18))
        );
        assert_eq!(
            source.next_event().await.unwrap(),
            Some(FormEvent::SplitIncrement)
        );
        assert_eq!(source.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_line_source_recovers_after_bad_line() {
        let reader = tokio_test::io::Builder::new()
            .read(b"wat\nshow\n")
            .build();
        let mut source = LineEventSource::new(BufReader::new(reader));

        assert!(source.next_event().await.is_err());
        assert_eq!(source.next_event().await.unwrap(), Some(FormEvent::Show));
    }

    #[tokio::test]
    async fn test_script_source_drains_in_order() {
        let mut source =
            ScriptEventSource::new(vec![FormEvent::SplitIncrement, FormEvent::Quit]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(
            source.next_event().await.unwrap(),
            Some(FormEvent::SplitIncrement)
        );
        assert_eq!(source.next_event().await.unwrap(), Some(FormEvent::Quit));
        assert_eq!(source.next_event().await.unwrap(), None);
    }
}
