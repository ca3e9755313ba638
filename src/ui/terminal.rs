use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crossterm::style::{style, Stylize};

use crate::usecases::contracts::{HostUi, TextRequest, Validation};

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";
const UNDECODABLE_INPUT_MESSAGE: &str = "Input is not valid UTF-8, try again";

enum Line {
    Text(String),
    Undecodable,
}

/// Line-oriented host UI. EOF (Ctrl-D) dismisses the current prompt.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl TerminalUi<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let styled = stdout.is_terminal();

        Self {
            input: stdin.lock(),
            output: stdout,
            styled,
        }
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<Line>> {
        let mut raw = Vec::new();
        let bytes = self.input.read_until(b'\n', &mut raw)?;
        if bytes == 0 {
            return Ok(None);
        }

        Ok(Some(match String::from_utf8(raw) {
            Ok(line) => Line::Text(line.trim().to_owned()),
            Err(_) => Line::Undecodable,
        }))
    }

    fn write_heading(&mut self, request: &TextRequest<'_>) -> io::Result<()> {
        if self.styled {
            writeln!(
                self.output,
                "{} {}",
                style(request.title).bold(),
                request.prompt
            )?;
            writeln!(self.output, "{}", style(format!("e.g. {}", request.placeholder)).dim())
        } else {
            writeln!(self.output, "{} {}", request.title, request.prompt)?;
            writeln!(self.output, "e.g. {}", request.placeholder)
        }
    }

    fn write_inline_error(&mut self, message: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "  {}", style(message).red())
        } else {
            writeln!(self.output, "  {message}")
        }
    }

    fn pick_action(&mut self, actions: &[&str]) -> io::Result<Option<String>> {
        for (index, action) in actions.iter().enumerate() {
            writeln!(self.output, "  [{}] {action}", index + 1)?;
        }
        write!(self.output, "Choose an action (Enter to dismiss){PROMPT_SYMBOL}")?;
        self.output.flush()?;

        let Some(answer) = self.read_line()? else {
            writeln!(self.output)?;
            return Ok(None);
        };

        match answer {
            Line::Text(answer) => Ok(match_action(&answer, actions).map(ToOwned::to_owned)),
            Line::Undecodable => Ok(None),
        }
    }
}

impl<R: BufRead, W: Write> HostUi for TerminalUi<R, W> {
    fn request_text(
        &mut self,
        request: &TextRequest<'_>,
        validator: &mut dyn FnMut(&str) -> Validation,
    ) -> io::Result<Option<String>> {
        self.write_heading(request)?;

        loop {
            write!(self.output, "{PROMPT_SYMBOL}")?;
            self.output.flush()?;

            let Some(value) = self.read_line()? else {
                writeln!(self.output)?;
                writeln!(self.output, "Cancelled.")?;
                return Ok(None);
            };

            let value = match value {
                Line::Text(value) => value,
                Line::Undecodable => {
                    self.write_inline_error(UNDECODABLE_INPUT_MESSAGE)?;
                    continue;
                }
            };

            match validator(&value) {
                Some(message) => self.write_inline_error(&message)?,
                None => return Ok(Some(value)),
            }
        }
    }

    fn notify(&mut self, message: &str, actions: &[&str]) -> io::Result<Option<String>> {
        if self.styled {
            writeln!(self.output, "{}", style(message).green())?;
        } else {
            writeln!(self.output, "{message}")?;
        }

        if actions.is_empty() {
            self.output.flush()?;
            return Ok(None);
        }

        self.pick_action(actions)
    }
}

/// Accepts the 1-based index or the action label, case-insensitively.
fn match_action<'a>(answer: &str, actions: &[&'a str]) -> Option<&'a str> {
    if answer.is_empty() {
        return None;
    }

    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| actions.get(i)).copied();
    }

    actions
        .iter()
        .find(|action| action.eq_ignore_ascii_case(answer))
        .copied()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const REQUEST: TextRequest<'static> = TextRequest {
        title: "Teeny",
        prompt: "Enter a link",
        placeholder: "https://example.com",
    };

    fn ui(input: &str) -> TerminalUi<Cursor<Vec<u8>>, Vec<u8>> {
        raw_ui(input.as_bytes())
    }

    fn raw_ui(input: &[u8]) -> TerminalUi<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalUi::new(Cursor::new(input.to_vec()), Vec::new())
    }

    fn output(ui: &TerminalUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.output.clone()).expect("output should be utf-8")
    }

    fn reject_short(value: &str) -> Validation {
        (value.len() < 3).then(|| "too short".to_owned())
    }

    #[test]
    fn reprompts_until_validator_accepts() {
        let mut ui = ui("ab\n  abcd  \n");

        let value = ui
            .request_text(&REQUEST, &mut reject_short)
            .expect("prompt should complete");

        assert_eq!(value.as_deref(), Some("abcd"));
        let printed = output(&ui);
        assert!(printed.starts_with("Teeny Enter a link\ne.g. https://example.com\n"));
        assert_eq!(printed.matches("too short").count(), 1);
    }

    #[test]
    fn undecodable_line_is_rejected_and_prompt_repeats() {
        let mut ui = raw_ui(b"\xff\xfe\nabcd\n");
        let mut seen = Vec::new();

        let value = ui
            .request_text(&REQUEST, &mut |value: &str| -> Validation {
                seen.push(value.to_owned());
                None
            })
            .expect("prompt should complete");

        assert_eq!(value.as_deref(), Some("abcd"));
        assert_eq!(seen, vec!["abcd".to_owned()]);
        assert!(output(&ui).contains(UNDECODABLE_INPUT_MESSAGE));
    }

    #[test]
    fn undecodable_action_answer_dismisses() {
        let mut ui = raw_ui(b"\xff\n");

        let chosen = ui
            .notify("created", &["Open Link"])
            .expect("notify should complete");

        assert_eq!(chosen, None);
    }

    #[test]
    fn eof_cancels_prompt() {
        let mut ui = ui("ab\n");

        let value = ui
            .request_text(&REQUEST, &mut reject_short)
            .expect("prompt should complete");

        assert_eq!(value, None);
        assert!(output(&ui).contains("Cancelled."));
    }

    #[test]
    fn notify_without_actions_reads_nothing() {
        let mut ui = ui("1\n");

        let chosen = ui.notify("done", &[]).expect("notify should complete");

        assert_eq!(chosen, None);
        assert_eq!(output(&ui), "done\n");
    }

    #[test]
    fn notify_returns_chosen_action() {
        let mut ui = ui("1\n");

        let chosen = ui
            .notify("created", &["Open Link"])
            .expect("notify should complete");

        assert_eq!(chosen.as_deref(), Some("Open Link"));
        assert!(output(&ui).contains("[1] Open Link"));
    }

    #[test]
    fn enter_dismisses_notification() {
        let mut ui = ui("\n");

        let chosen = ui
            .notify("created", &["Open Link"])
            .expect("notify should complete");

        assert_eq!(chosen, None);
    }

    #[test]
    fn action_can_be_picked_by_label_or_index() {
        let actions = ["Open Link", "Copy Again"];

        assert_eq!(match_action("open link", &actions), Some("Open Link"));
        assert_eq!(match_action("2", &actions), Some("Copy Again"));
        assert_eq!(match_action("0", &actions), None);
        assert_eq!(match_action("3", &actions), None);
        assert_eq!(match_action("nope", &actions), None);
    }
}
