use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Summary fields render as one field/value table; the amortisation
/// schedule, when present, renders as its own table below it, followed by
/// any warnings and the methodology line.
pub fn print_table(value: &Value) {
    let map = match value.as_object() {
        Some(m) => m,
        None => {
            println!("{}", value);
            return;
        }
    };

    match map.get("result") {
        Some(Value::Object(result)) => {
            print_summary_table(result);

            if let Some(Value::Array(schedule)) = result.get("schedule") {
                if !schedule.is_empty() {
                    println!("\nSchedule:");
                    print_schedule_table(schedule);
                }
            }

            if let Some(Value::Array(warnings)) = map.get("warnings") {
                if !warnings.is_empty() {
                    println!("\nWarnings:");
                    for w in warnings {
                        if let Value::String(s) = w {
                            println!("  - {}", s);
                        }
                    }
                }
            }

            if let Some(Value::String(meth)) = map.get("methodology") {
                println!("\nMethodology: {}", meth);
            }
        }
        _ => print_flat_object(value),
    }
}

fn print_summary_table(result: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result {
        // The schedule is rendered as its own table below.
        if key == "schedule" {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_schedule_table(schedule: &[Value]) {
    let first = match schedule.first() {
        Some(Value::Object(first)) => first,
        _ => return,
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in schedule {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
