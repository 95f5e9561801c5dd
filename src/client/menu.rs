use std::io::{self, BufRead, Write};

use crate::client::proxy::{ClientError, ProxyClient, GAMES_PATH};
use crate::client::render::{render_games, render_profile, GamesView};
use crate::client::Session;

const VANITY_PROMPT: &str = "\nEnter a Steam vanity url (steamcommunity.com/id/VANITYURL): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ProfileSummary,
    TopGames,
    AllGames,
    Exit,
    ChangeApiKey,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ProfileSummary,
        MenuChoice::TopGames,
        MenuChoice::AllGames,
        MenuChoice::Exit,
        MenuChoice::ChangeApiKey,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::ProfileSummary => "1",
            MenuChoice::TopGames => "2",
            MenuChoice::AllGames => "3",
            MenuChoice::Exit => "0",
            MenuChoice::ChangeApiKey => "X",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ProfileSummary => "Profile Summary",
            MenuChoice::TopGames => "Top 10 Games",
            MenuChoice::AllGames => "All Games",
            MenuChoice::Exit => "Exit",
            MenuChoice::ChangeApiKey => "Change API key",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

pub async fn action_summary(proxy: &ProxyClient, session: &Session, vanity: &str) -> Result<String, ClientError> {
    let profile = proxy.fetch_profile(session, vanity).await?;
    Ok(render_profile(&profile))
}

pub async fn action_games(
    proxy: &ProxyClient,
    session: &Session,
    vanity: &str,
    view: GamesView,
) -> Result<String, ClientError> {
    let profile = proxy.fetch_profile(session, vanity).await?;

    let mut out = String::new();
    if let GamesView::Top(_) = view {
        out.push_str(&format!("Querying {}...\n", proxy.endpoint_url(GAMES_PATH, vanity)));
    }
    let games = proxy.fetch_games(session, vanity).await?;
    let owner = profile.display_name().unwrap_or(vanity);

    out.push_str(&render_games(owner, &games, view));
    Ok(out)
}

/// Interactive menu loop over any line source, so it can be driven by stdin
/// or by a test buffer.
pub struct Repl<R, W> {
    proxy: ProxyClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(proxy: ProxyClient, input: R, output: W) -> Self {
        Self { proxy, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_non_empty(&mut self, first: &str, retry: &str, complaint: &str) -> io::Result<Option<String>> {
        let mut text = first;
        loop {
            match self.prompt(text)? {
                None => return Ok(None),
                Some(value) if !value.is_empty() => return Ok(Some(value)),
                Some(_) => {
                    writeln!(self.output, "{}", complaint)?;
                    text = retry;
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n----- Steam API Client -----")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "[{}] {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Runs until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Steam API client!\n")?;

        let Some(api_key) = self.prompt_non_empty(
            "Before proceeding, please enter your Steam Web API key: ",
            "Please enter a Steam Web API key: ",
            "Can not proceed without an API key",
        )?
        else {
            return Ok(());
        };

        writeln!(self.output, "\nRemembering API key for client session...")?;
        let mut session = Session::new(api_key);

        loop {
            self.print_menu()?;
            let Some(input) = self.prompt("\nChoose an option: ")? else {
                return Ok(());
            };

            let choice = match MenuChoice::parse(&input) {
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Invalid choice. Enter a new request.")?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Exit => {
                    writeln!(self.output, "\nExiting...")?;
                    return Ok(());
                }
                MenuChoice::ChangeApiKey => {
                    let Some(api_key) = self.prompt_non_empty(
                        "\nEnter a new API key: ",
                        "\nEnter a new API key: ",
                        "Can't proceed without a valid API key.",
                    )?
                    else {
                        return Ok(());
                    };
                    session.api_key = api_key;
                }
                action => {
                    let Some(vanity) = self.prompt(VANITY_PROMPT)? else {
                        return Ok(());
                    };

                    let result = match action {
                        MenuChoice::ProfileSummary => action_summary(&self.proxy, &session, &vanity).await,
                        MenuChoice::TopGames => {
                            action_games(&self.proxy, &session, &vanity, GamesView::Top(10)).await
                        }
                        _ => action_games(&self.proxy, &session, &vanity, GamesView::All).await,
                    };

                    match result {
                        Ok(text) => write!(self.output, "{}", text)?,
                        Err(e) => {
                            tracing::debug!("request for {} failed: {:?}", vanity, e);
                            writeln!(self.output, "Request failed: {}", e)?;
                        }
                    }
                }
            }
        }
    }
}
