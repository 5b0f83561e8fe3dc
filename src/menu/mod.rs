//! Interactive menu loop: prompts, dispatch, and table assembly.
//!
//! Each action is one synchronous request/format/print cycle. Network
//! and API failures are reported as a single line and never escape the
//! action; only stdin/stdout failures propagate out of the loop.

use crate::exchange::{
    ExchangeError, FapiClient, FundingRate, Period, PositionRatio, Ticker24h,
};
use crate::render::{fmt_utc_millis, Table};
use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

/// One of the five menu entries, matched exactly against "1"–"5".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Price,
    Funding,
    PositionRatio,
    Latency,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Choice> {
        match input {
            "1" => Some(Choice::Price),
            "2" => Some(Choice::Funding),
            "3" => Some(Choice::PositionRatio),
            "4" => Some(Choice::Latency),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or stdin closes.
pub async fn run(client: &FapiClient) -> Result<()> {
    loop {
        println!();
        println!("Menu:");
        println!("1. Price");
        println!("2. Funding Info");
        println!("3. Position Data");
        println!("4. Measure Latency");
        println!("5. Exit");

        let Some(input) = prompt("Please select an option (1-5)")? else {
            // stdin closed; nothing more will ever arrive
            println!();
            return Ok(());
        };
        clear_screen();

        match Choice::parse(&input) {
            Some(Choice::Price) => price_action(client).await?,
            Some(Choice::Funding) => funding_action(client).await?,
            Some(Choice::PositionRatio) => position_action(client).await?,
            Some(Choice::Latency) => latency_action(client).await?,
            Some(Choice::Exit) => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            None => println!("Invalid option. Please try again."),
        }
    }
}

async fn price_action(client: &FapiClient) -> Result<()> {
    let Some(symbol) = prompt_symbol()? else {
        return Ok(());
    };
    match client.ticker_24h(&symbol).await {
        Ok(ticker) => println!("{}", ticker_table(&ticker)),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn funding_action(client: &FapiClient) -> Result<()> {
    let Some(symbol) = prompt_symbol()? else {
        return Ok(());
    };
    match client.latest_funding_rate(&symbol).await {
        Ok(funding) => println!("{}", funding_table(&funding)),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn position_action(client: &FapiClient) -> Result<()> {
    let Some(symbol) = prompt_symbol()? else {
        return Ok(());
    };

    let hint: Vec<&str> = Period::ALL.iter().map(Period::as_str).collect();
    println!("Available periods: {}", hint.join(", "));

    let Some(period_input) = prompt("Enter the period")? else {
        return Ok(());
    };
    // Reject off-list periods before touching the network.
    let period: Period = match period_input.parse() {
        Ok(period) => period,
        Err(_) => {
            println!("Invalid period selected.");
            return Ok(());
        }
    };

    match client.latest_position_ratio(&symbol, period).await {
        Ok(ratio) => println!("{}", ratio_table(&symbol, period, &ratio)),
        Err(err) => report(&err),
    }
    Ok(())
}

async fn latency_action(client: &FapiClient) -> Result<()> {
    match client.ping().await {
        Ok(sample) if sample.status.is_success() => {
            println!(
                "Latency to Binance Futures API: {:.2} ms",
                sample.latency_ms()
            );
        }
        Ok(sample) => println!("Error: received status code {}", sample.status.as_u16()),
        Err(err) => report(&err),
    }
    Ok(())
}

/// Seven metric rows; values are passed through verbatim except for
/// the percent suffix on the change-percent row.
pub fn ticker_table(ticker: &Ticker24h) -> Table {
    Table::new(format!("Price Information for {}", ticker.symbol))
        .row("Price Change", ticker.price_change.to_string())
        .row(
            "Price Change Percent",
            format!("{}%", ticker.price_change_percent),
        )
        .row("Last Price", ticker.last_price.to_string())
        .row("Open Price", ticker.open_price.to_string())
        .row("High Price", ticker.high_price.to_string())
        .row("Low Price", ticker.low_price.to_string())
        .row("Volume", ticker.volume.to_string())
}

pub fn funding_table(funding: &FundingRate) -> Table {
    Table::new(format!("Funding Information for {}", funding.symbol))
        .row("Funding Rate", funding.funding_rate.to_string())
        .row("Funding Time", fmt_utc_millis(funding.funding_time))
}

pub fn ratio_table(symbol: &str, period: Period, ratio: &PositionRatio) -> Table {
    Table::new(format!(
        "Most Recent Position Data for {symbol} over period '{period}'"
    ))
    .row("Timestamp", fmt_utc_millis(ratio.timestamp))
    .row("Long/Short Ratio", ratio.long_short_ratio.to_string())
    .row("Long Account", ratio.long_account.to_string())
    .row("Short Account", ratio.short_account.to_string())
}

/// Map a failed request to its one-line report. API errors carry the
/// vendor message; an empty result list is not an error to shout about.
fn report(err: &ExchangeError) {
    debug!(%err, "action failed");
    match err {
        ExchangeError::NoData => println!("No data available."),
        ExchangeError::Api { msg, .. } => println!("Error: {msg}"),
        other => println!("An error occurred: {other}"),
    }
}

fn prompt_symbol() -> io::Result<Option<String>> {
    Ok(prompt("Enter the symbol (e.g., BTCUSDT)")?.map(|s| s.to_uppercase()))
}

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// Read one line, trimmed. `None` means the reader hit end of input
/// and no further prompt can succeed.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Clear the terminal between actions to reduce clutter. Skipped when
/// stdout is piped so captured output stays readable.
fn clear_screen() {
    if io::stdout().is_terminal() {
        print!("\x1b[2J\x1b[1;1H");
        let _ = io::stdout().flush();
    }
}
