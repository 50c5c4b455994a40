use octofault_lib::types::{ApiError, ApiErrorDetail};
use octofault_lib::{ApiException, FaultRecord};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

#[derive(Tabled, Serialize)]
struct DetailRow {
    #[tabled(rename = "Resource")]
    #[serde(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Message")]
    #[serde(rename = "Message")]
    message: String,
}

#[derive(Tabled, Serialize)]
struct FaultRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Recorded")]
    #[serde(rename = "Recorded")]
    recorded_at: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Message")]
    #[serde(rename = "Message")]
    message: String,
    #[tabled(rename = "Details")]
    #[serde(rename = "Details")]
    details: usize,
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn format_status(status: Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "(no response)".to_string(),
    }
}

fn format_detail(detail: &ApiErrorDetail) -> String {
    let location = match (detail.resource.as_deref(), detail.field.as_deref()) {
        (Some(resource), Some(field)) => format!("{}.{}", resource, field),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => "-".to_string(),
    };
    format!(
        "[{}] {}: {}",
        location,
        detail.code.as_deref().unwrap_or("error"),
        detail.message.as_deref().unwrap_or("-")
    )
}

fn build_detail_rows(api_error: &ApiError) -> Vec<DetailRow> {
    api_error
        .errors
        .iter()
        .map(|d| DetailRow {
            resource: or_dash(d.resource.as_deref()),
            field: or_dash(d.field.as_deref()),
            code: or_dash(d.code.as_deref()),
            message: or_dash(d.message.as_deref()),
        })
        .collect()
}

fn build_fault_rows(records: &[FaultRecord]) -> Vec<FaultRow> {
    records
        .iter()
        .map(|r| FaultRow {
            id: r.id,
            recorded_at: r.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            source: r.source.clone(),
            status: format_status(r.exception.status_code()),
            message: truncate(r.exception.message(), 60),
            details: r.exception.api_error().errors.len(),
        })
        .collect()
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// Multi-line human-readable rendering of a fault.
pub fn format_fault_text(exception: &ApiException) -> String {
    let api_error = exception.api_error();
    let mut lines = vec![
        format!("status: {}", format_status(exception.status_code())),
        format!("message: {}", exception.message()),
    ];
    if let Some(url) = &api_error.documentation_url {
        lines.push(format!("documentation: {}", url));
    }
    if api_error.has_details() {
        lines.push("errors:".to_string());
        for detail in &api_error.errors {
            lines.push(format!("  - {}", format_detail(detail)));
        }
    }
    lines.join("\n")
}

pub fn print_fault(exception: &ApiException, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(exception),
        OutputFormat::Text => println!("{}", format_fault_text(exception)),
        OutputFormat::Table => {
            println!("status: {}", format_status(exception.status_code()));
            println!("message: {}", exception.message());
            if exception.api_error().has_details() {
                println!("{}", Table::new(build_detail_rows(exception.api_error())));
            }
        }
    }
}

pub fn print_fault_record(record: &FaultRecord, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(record),
        _ => {
            println!(
                "fault {} from {} at {}",
                record.id,
                record.source,
                record.recorded_at.to_rfc3339()
            );
            print_fault(&record.exception, format);
        }
    }
}

pub fn print_faults(records: &[FaultRecord], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&records),
        OutputFormat::Table => println!("{}", Table::new(build_fault_rows(records))),
        OutputFormat::Text => {
            for row in build_fault_rows(records) {
                println!(
                    "#{} {} {} [{}] {}",
                    row.id, row.recorded_at, row.source, row.status, row.message
                );
            }
        }
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
