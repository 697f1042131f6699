//! Output formatting shared by `process` and `batch`.

use cardstmt_core::ParsedStatement;

/// Output format for parsed statements.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per transaction
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing this format to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_statement(statement: &ParsedStatement, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(statement)?),
        OutputFormat::Csv => format_csv(statement),
        OutputFormat::Text => Ok(format_text(statement)),
    }
}

fn format_csv(statement: &ParsedStatement) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "issuer",
        "card_number",
        "billing_cycle",
        "due_date",
        "total_balance",
        "transaction_date",
        "transaction_description",
        "transaction_amount",
    ])?;

    let header = [
        statement.issuer.name(),
        statement.card_number.as_str(),
        statement.billing_cycle.as_str(),
        statement.due_date.as_str(),
        statement.total_balance.as_str(),
    ];

    if statement.transactions.is_empty() {
        wtr.write_record(header.iter().copied().chain(["", "", ""]))?;
    }

    for txn in &statement.transactions {
        wtr.write_record(header.iter().copied().chain([
            txn.date.as_str(),
            txn.description.as_str(),
            txn.amount.as_str(),
        ]))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(statement: &ParsedStatement) -> String {
    let mut output = String::new();

    output.push_str(&format!("Issuer: {}\n", statement.issuer));
    output.push_str(&format!("Card (last 4): {}\n", statement.card_number));
    output.push_str(&format!("Billing cycle: {}\n", statement.billing_cycle));
    output.push_str(&format!("Due date: {}\n", statement.due_date));
    output.push_str(&format!("Total balance: {}\n", statement.total_balance));
    output.push('\n');

    if statement.transactions.is_empty() {
        output.push_str("Transactions: none found\n");
        return output;
    }

    output.push_str(&format!("Transactions ({}):\n", statement.transactions.len()));
    for txn in &statement.transactions {
        output.push_str(&format!("  {}  {:<40}  {}\n", txn.date, txn.description, txn.amount));
    }

    output
}
