use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use waybill_core::json::schema::{
    generate_data_model_schema, generate_json_schema, generate_report_schema,
};

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    /// Routing request read by `build`, `extract` and `solve`
    Request,
    /// Data model written to external solvers
    DataModel,
    /// Extracted report
    Report,
}

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file
        #[arg(long, short = 'o')]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = SchemaKind::Request)]
        kind: SchemaKind,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out, kind } => {
            let schema = match kind {
                SchemaKind::Request => generate_json_schema()?,
                SchemaKind::DataModel => generate_data_model_schema()?,
                SchemaKind::Report => generate_report_schema()?,
            };

            crate::render::write_output(Some(&out), &schema)?;
        }
    }

    Ok(())
}
