use crate::pipeline;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

#[derive(Args)]
pub struct FeaturesArgs {
    /// Peptide sequence (single-letter codes, at least 10 residues)
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Output format (table, json, csv)
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub fn run(args: FeaturesArgs) -> anyhow::Result<()> {
    let descriptors = pipeline::describe_sequence(&args.sequence)?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }
        "csv" => {
            println!("feature,value");
            for (name, value) in &descriptors {
                println!("{},{}", name, value);
            }
        }
        _ => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Feature", "Value"]);
            for (name, value) in &descriptors {
                table.add_row(vec![Cell::new(name), Cell::new(format!("{:.4}", value))]);
            }
            println!("{}", table);
            println!("{} descriptors", descriptors.len());
        }
    }
    Ok(())
}
