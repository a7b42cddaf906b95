//! Interactive session: the terminal counterpart of the booking page.
//!
//! Each input line is one user action. Forms are filled in by prompting for
//! one field per line, in the order the page lays them out, and only while
//! the section holding the form is on screen.

use std::io::Write;

use skybook_core::{BookingForm, FlightSort, SearchForm, Section, SortKey, SortOrder};
use skybook_frontend::{KeyValueStore, UiEvent, View, ViewController};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::terminal::section_hint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Search(Option<FlightSort>),
    /// 1-based card number as printed in the results list.
    Book(usize),
    Submit,
    Back,
    Json,
    Pdf,
    Home,
    Help,
    Quit,
    Empty,
}

/// Parses one line of shell input.
pub(crate) fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ShellCommand::Empty);
    };
    let rest: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("search", args) => ShellCommand::Search(parse_sort(args)?),
        ("book", [n]) => match n.parse::<usize>() {
            Ok(n) if n > 0 => ShellCommand::Book(n),
            _ => return Err(format!("not a card number: {n}")),
        },
        ("book", _) => return Err("usage: book <n>".to_string()),
        ("submit", []) => ShellCommand::Submit,
        ("back", []) => ShellCommand::Back,
        ("json", []) => ShellCommand::Json,
        ("pdf", []) => ShellCommand::Pdf,
        ("home", []) => ShellCommand::Home,
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        (other, _) => return Err(format!("unknown command: {other}")),
    };
    Ok(command)
}

fn parse_sort(args: &[&str]) -> Result<Option<FlightSort>, String> {
    let key = match args.first().map(|s| s.to_ascii_lowercase()) {
        None => return Ok(None),
        Some(k) if k == "price" => SortKey::Price,
        Some(k) if k == "duration" => SortKey::Duration,
        Some(k) => return Err(format!("cannot sort by {k}; use price or duration")),
    };
    let order = match args.get(1).map(|s| s.to_ascii_lowercase()) {
        None => SortOrder::Asc,
        Some(o) if o == "asc" => SortOrder::Asc,
        Some(o) if o == "desc" => SortOrder::Desc,
        Some(o) => return Err(format!("unknown order {o}; use asc or desc")),
    };
    if args.len() > 2 {
        return Err("usage: search [price|duration] [asc|desc]".to_string());
    }
    Ok(Some(FlightSort { key, order }))
}

/// Line-driven front end over a [`ViewController`].
pub(crate) struct Shell<R, P> {
    lines: Lines<R>,
    prompt: P,
}

impl<R, P> Shell<R, P>
where
    R: AsyncBufRead + Unpin,
    P: Write,
{
    pub(crate) fn new(input: R, prompt: P) -> Self {
        Self {
            lines: input.lines(),
            prompt,
        }
    }

    /// Runs until `quit` or end of input. Errors the controller does not
    /// handle are logged and the session carries on.
    pub(crate) async fn run<V, S>(
        &mut self,
        controller: &mut ViewController<V, S>,
    ) -> anyhow::Result<()>
    where
        V: View,
        S: KeyValueStore,
    {
        loop {
            let section = controller.state().section;
            let Some(line) = self.ask(&format!("{}> ", section.dom_id())).await? else {
                return Ok(());
            };
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    self.say(&message)?;
                    continue;
                }
            };

            let event = match command {
                ShellCommand::Quit => return Ok(()),
                ShellCommand::Empty => continue,
                ShellCommand::Help => {
                    self.say(section_hint(section))?;
                    continue;
                }
                ShellCommand::Search(_) if section != Section::Search => {
                    self.say(&format!("no search form on screen ({})", section_hint(section)))?;
                    continue;
                }
                ShellCommand::Submit if section != Section::Booking => {
                    self.say(&format!("no booking form on screen ({})", section_hint(section)))?;
                    continue;
                }
                ShellCommand::Search(sort) => match self.read_search_form().await? {
                    Some(form) => UiEvent::SearchSubmitted { form, sort },
                    None => return Ok(()),
                },
                ShellCommand::Book(n) => match controller.card(n - 1) {
                    Some(card) => UiEvent::BookFlight(card.trigger.clone()),
                    None => {
                        self.say(&format!("no flight [{n}] on screen"))?;
                        continue;
                    }
                },
                ShellCommand::Submit => match self.read_booking_form().await? {
                    Some(form) => UiEvent::BookingSubmitted(form),
                    None => return Ok(()),
                },
                ShellCommand::Back if section == Section::Booking => UiEvent::BackToResults,
                ShellCommand::Back => UiEvent::BackToSearch,
                ShellCommand::Json => UiEvent::DownloadJson,
                ShellCommand::Pdf => UiEvent::DownloadPdf,
                ShellCommand::Home => UiEvent::BackToHome,
            };

            let source = event.source_id();
            if let Err(e) = controller.dispatch(event).await {
                tracing::error!(error = %e, source, "unhandled error");
            }
        }
    }

    async fn read_search_form(&mut self) -> anyhow::Result<Option<SearchForm>> {
        let Some(origin) = self.ask("  origin: ").await? else {
            return Ok(None);
        };
        let Some(destination) = self.ask("  destination: ").await? else {
            return Ok(None);
        };
        let Some(date) = self.ask("  date (YYYY-MM-DD): ").await? else {
            return Ok(None);
        };
        Ok(Some(SearchForm {
            origin,
            destination,
            date,
        }))
    }

    async fn read_booking_form(&mut self) -> anyhow::Result<Option<BookingForm>> {
        let Some(name) = self.ask("  name: ").await? else {
            return Ok(None);
        };
        let Some(email) = self.ask("  email: ").await? else {
            return Ok(None);
        };
        let Some(age) = self.ask("  age: ").await? else {
            return Ok(None);
        };
        Ok(Some(BookingForm { name, email, age }))
    }

    async fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.prompt, "{prompt}")?;
        self.prompt.flush()?;
        Ok(self.lines.next_line().await?)
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.prompt, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
