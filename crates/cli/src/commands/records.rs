use crate::di::RecordServices;
use anyhow::anyhow;
use stubzone_domain::{DnsRecord, DomainError};

const HEADERS: [&str; 4] = ["DOMAIN", "TYPE", "VALUE", "TTL"];

pub async fn add(
    services: &RecordServices,
    domain: &str,
    record_type: &str,
    value: &str,
    ttl: u32,
) -> anyhow::Result<()> {
    let record = services
        .add
        .execute(domain, record_type, value, ttl)
        .await
        .map_err(|e| explain(e, domain))?;

    println!(
        "Added DNS record: {} -> {} ({})",
        record.domain, record.value, record.record_type
    );
    Ok(())
}

pub async fn remove(services: &RecordServices, domain: &str) -> anyhow::Result<()> {
    let record = services
        .remove
        .execute(domain)
        .await
        .map_err(|e| explain(e, domain))?;
    println!("Removed DNS record: {}", record.domain);
    Ok(())
}

pub async fn list(services: &RecordServices) -> anyhow::Result<()> {
    let records = services.list.execute().await;

    if records.is_empty() {
        println!("No DNS records found");
        return Ok(());
    }

    print!("{}", render_table(&records));
    Ok(())
}

pub async fn get(services: &RecordServices, domain: &str) -> anyhow::Result<()> {
    let record = services
        .get
        .execute(domain)
        .await
        .map_err(|e| explain(e, domain))?;
    print!("{}", render_table(std::slice::from_ref(&record)));
    Ok(())
}

/// Input mistakes get a hint; store failures are reported as is.
fn explain(error: DomainError, domain: &str) -> anyhow::Error {
    if error.is_validation() {
        anyhow!(
            "rejected record for {}: {} (A needs an IP address, CNAME a domain)",
            domain,
            error
        )
    } else if let DomainError::NotFound(name) = &error {
        anyhow!("no DNS record for {}", name)
    } else {
        error.into()
    }
}

fn render_table(records: &[DnsRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.domain.clone(),
                r.record_type.to_string(),
                r.value.clone(),
                r.ttl.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, HEADERS.iter().copied());
    for row in &rows {
        push_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(out: &mut String, widths: &[usize; 4], cells: impl Iterator<Item = &'a str>) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use stubzone_domain::RecordType;

    #[test]
    fn test_explain_validation_error_adds_hint() {
        let message =
            explain(DomainError::InvalidAddress("bogus".to_string()), "a.local").to_string();
        assert!(message.starts_with("rejected record for a.local: Invalid IP address: bogus"));
        assert!(message.contains("A needs an IP address"));
    }

    #[test]
    fn test_explain_not_found_and_store_errors() {
        let missing = explain(DomainError::NotFound("ghost.local.".to_string()), "ghost.local");
        assert_eq!(missing.to_string(), "no DNS record for ghost.local.");

        let disk = explain(DomainError::PersistenceError("disk full".to_string()), "a.local");
        assert_eq!(disk.to_string(), "Failed to save records: disk full");
        assert!(disk.downcast_ref::<DomainError>().is_some());
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let records = vec![
            DnsRecord::new("a.local", RecordType::A, "10.0.0.1", 60).unwrap(),
            DnsRecord::new("www.example.com", RecordType::CNAME, "example.com", 3600).unwrap(),
        ];

        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "DOMAIN            TYPE   VALUE        TTL");
        assert_eq!(lines[1], "a.local.          A      10.0.0.1     60");
        assert_eq!(lines[2], "www.example.com.  CNAME  example.com  3600");
    }
}
