//! # TipSplit CLI Application
//!
//! Terminal host for the bill splitting engine. Collects raw input, builds
//! the typed request, and renders results, the summary block, and a JSON
//! dump of the result.

use std::io::{self, BufRead, Write};

use split_core::summary::{format_summary, SummaryInput, TIP_PLACEHOLDER};
use split_core::tip::{preset_label, TipSelection, PRESET_RATES};
use split_core::units::Currency;
use split_core::validation::{parse_bill_amount, parse_people};
use split_core::{calculate, BillInput, RoundingMode, SplitError};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

/// Format an amount for display, guarding against non-finite values
fn format_money(amount: Currency) -> String {
    if amount.value().is_finite() {
        format!("${:.2}", amount.value())
    } else {
        "$0.00".to_string()
    }
}

fn rounding_label(mode: RoundingMode) -> &'static str {
    match mode {
        RoundingMode::None => "No rounding",
        RoundingMode::RoundTotal => "Round total",
        RoundingMode::RoundPerPerson => "Round per person",
    }
}

/// One-line status for each failure, shown before the error details
fn status_message(err: &SplitError) -> &'static str {
    match err {
        SplitError::InvalidBillAmount { .. } => "Enter a valid bill amount",
        SplitError::MissingOrInvalidTip { .. } => "Pick a tip or enter a custom %",
        SplitError::InvalidPeopleCount { .. } => "People must be at least 1",
        SplitError::NumericParseError { .. } => "Invalid number format",
    }
}

fn main() {
    println!("TipSplit CLI - Bill Splitting Calculator");
    println!("========================================");
    println!();

    let bill_text = prompt_line("Bill amount [e.g. 42.50]: ");

    println!();
    println!("Tip presets:");
    for (i, rate) in PRESET_RATES.iter().enumerate() {
        println!("  {}) {}", i + 1, preset_label(*rate));
    }
    let preset_text = prompt_line("Preset [1-6, blank for none]: ");
    let custom_text = prompt_line("Custom tip % [overrides preset, blank for none]: ");

    println!();
    let people_text = prompt_line("People [1]: ");

    println!();
    println!("Rounding:");
    println!("  0) No rounding");
    println!("  1) Round total");
    println!("  2) Round per person");
    let rounding_text = prompt_line("Rounding [0]: ");

    let preset = match preset_text.parse::<usize>() {
        Ok(i) if (1..=PRESET_RATES.len()).contains(&i) => Some(PRESET_RATES[i - 1]),
        _ => None,
    };
    let selection = TipSelection {
        preset,
        custom_percent: if custom_text.is_empty() {
            None
        } else {
            Some(custom_text)
        },
    };
    let rounding = match rounding_text.as_str() {
        "1" => RoundingMode::RoundTotal,
        "2" => RoundingMode::RoundPerPerson,
        _ => RoundingMode::None,
    };
    let people_text = if people_text.is_empty() {
        "1".to_string()
    } else {
        people_text
    };

    println!();
    match run(&bill_text, &selection, &people_text, rounding) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Status: {}", status_message(&e));
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn run(
    bill_text: &str,
    selection: &TipSelection,
    people_text: &str,
    rounding: RoundingMode,
) -> Result<(), SplitError> {
    let bill_amount = parse_bill_amount(bill_text)?;
    let tip_rate = selection.resolve()?;
    let people_count = parse_people(people_text)?;

    let input = BillInput {
        bill_amount,
        tip_rate,
        people_count,
        rounding,
    };
    let result = calculate(&input)?;

    let tip_percent = selection.display_percent();

    println!("═══════════════════════════════════════");
    println!("  BILL SPLIT RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Bill:     {}", format_money(input.bill_amount));
    println!(
        "  Tip:      {}%",
        tip_percent.as_deref().unwrap_or(TIP_PLACEHOLDER)
    );
    println!("  People:   {}", input.people_count);
    println!("  Rounding: {}", rounding_label(input.rounding));
    println!();
    println!("Results:");
    println!("  Tip Amount: {}", format_money(result.tip_amount));
    println!("  Total:      {}", format_money(result.total));
    println!("  Per Person: {}", format_money(result.per_person));
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("Summary:");
    println!(
        "{}",
        format_summary(&SummaryInput {
            bill: &format_money(input.bill_amount),
            tip_percent: tip_percent.as_deref(),
            people: input.people_count,
            tip_amount: &format_money(result.tip_amount),
            total: &format_money(result.total),
            per_person: &format_money(result.per_person),
        })
    );

    println!();
    println!("JSON Output (for host/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    Ok(())
}
