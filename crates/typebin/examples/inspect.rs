//! Simple decoder to inspect dynamic values.
//!
//! Usage: `cargo run --example inspect -- <hex | base64 | path>`

use std::fs;

use typebin::codec::{Codec, DynamicCodec};
use typebin::Value;

fn format_value(v: &Value, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match v {
        Value::Null => out.push_str("null\n"),
        Value::Bool(b) => out.push_str(&format!("{}\n", b)),
        Value::Number(n) => out.push_str(&format!("{}\n", n)),
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                out.push_str(&format!("\"{}...\"\n", preview));
            } else {
                out.push_str(&format!("\"{}\"\n", preview));
            }
        }
        Value::Bytes(b) => out.push_str(&format!("BYTES[{}] {}\n", b.len(), hex::encode(&b[..b.len().min(16)]))),
        Value::Array(items) => {
            out.push_str(&format!("ARRAY[{}]\n", items.len()));
            for item in items {
                out.push_str(&format!("{}  - ", pad));
                format_value(item, indent + 1, out);
            }
        }
        Value::Object(obj) => {
            out.push_str(&format!("OBJECT[{}]\n", obj.len()));
            for (key, item) in obj.iter() {
                out.push_str(&format!("{}  {}: ", pad, key));
                format_value(item, indent + 1, out);
            }
        }
    }
}

fn main() {
    let arg = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "05000000020000000568656c6c6f0300000005776f726c64000000016e00".to_string());

    let codec = DynamicCodec::new();
    let value = if let Ok(value) = codec.decode_hex(&arg) {
        println!("Input: hex ({} chars)", arg.len());
        value
    } else if let Ok(value) = codec.decode_base64(&arg) {
        println!("Input: base64 ({} chars)", arg.len());
        value
    } else {
        let data = fs::read(&arg).expect("Failed to read file");
        println!("Input: {} ({} bytes)", arg, data.len());
        codec.decode_exact(&data).expect("Failed to decode")
    };

    let mut out = String::new();
    format_value(&value, 0, &mut out);
    println!("\n=== Value ===");
    print!("{}", out);
}
