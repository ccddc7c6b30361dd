//! Output writers for the inspect surface report

use crate::classify::{classify, DispatchStrategy};
use crate::types::MethodSignature;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait SurfaceWriter {
    fn write_surface(&mut self, class_name: &str, methods: &[MethodSignature])
        -> anyhow::Result<()>;
}

/// JSON shape of one inspected method: the signature plus its computed
/// dispatch strategy.
#[derive(Debug, Serialize)]
struct MethodReport<'a> {
    #[serde(flatten)]
    signature: &'a MethodSignature,
    strategy: DispatchStrategy,
}

#[derive(Debug, Serialize)]
struct SurfaceReport<'a> {
    class: &'a str,
    methods: Vec<MethodReport<'a>>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SurfaceWriter for JsonWriter<W> {
    fn write_surface(
        &mut self,
        class_name: &str,
        methods: &[MethodSignature],
    ) -> anyhow::Result<()> {
        let report = SurfaceReport {
            class: class_name,
            methods: methods
                .iter()
                .map(|signature| MethodReport {
                    signature,
                    strategy: classify(&signature.return_type),
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SurfaceWriter for TerminalWriter<W> {
    fn write_surface(
        &mut self,
        class_name: &str,
        methods: &[MethodSignature],
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}: {} method(s)",
            class_name.bold(),
            methods.len()
        )?;
        for method in methods {
            let strategy = match classify(&method.return_type) {
                DispatchStrategy::Stream => "stream".cyan(),
                DispatchStrategy::Deferred => "deferred".yellow(),
                DispatchStrategy::Direct => "direct".green(),
            };
            writeln!(self.writer, "  [{strategy}] {}", method.declaration_text)?;
        }
        Ok(())
    }
}

/// Create a surface writer for the requested output format.
pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn SurfaceWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
