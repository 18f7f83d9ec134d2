use std::sync::Arc;

use anyhow::{Context, Result};
use pk_app::PhoneMaskBinding;
use pk_core::ports::TextFieldPort;
use pk_infra::MemoryTextField;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{debug, info_span, Instrument};

pub async fn run(inputs: Vec<String>, paste: bool) -> Result<()> {
    let inputs = if inputs.is_empty() {
        read_stdin_lines().await?
    } else {
        inputs
    };

    for raw in inputs {
        let formatted = format_through_field(&raw, paste)
            .instrument(info_span!("command.phone", paste))
            .await;
        println!("{formatted}");
    }
    Ok(())
}

async fn format_through_field(raw: &str, paste: bool) -> String {
    let field = Arc::new(MemoryTextField::new(""));
    let binding = PhoneMaskBinding::new(field.clone());

    if paste {
        // The pasted text lands only after the paste handler has been scheduled.
        tokio::join!(binding.on_paste(), async { field.insert(raw) });
    } else {
        for ch in raw.chars() {
            field.insert(&ch.to_string());
            binding.on_input();
        }
    }

    let value = field.value();
    debug!(raw, formatted = %value, "phone formatted");
    value
}

async fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut inputs = Vec::new();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        inputs.push(line);
    }
    Ok(inputs)
}
