use anyhow::{Context, Result};
use clap::Parser;
use guardgen::cli::{Cli, Commands};
use guardgen::output::{create_writer, OutputFormat};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            class,
            output,
        } => handle_generate(&input, &class, output),
        Commands::Inspect {
            input,
            class,
            format,
        } => handle_inspect(&input, &class, format),
    }
}

fn handle_generate(input: &Path, class: &str, output: Option<PathBuf>) -> Result<()> {
    let source = read_input(input)?;
    let input_name = input.display().to_string();

    let generated = guardgen::pipeline::generate(&source, class, Some(&input_name))?;

    match output {
        Some(path) => std::fs::write(&path, generated)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{generated}"),
    }
    Ok(())
}

fn handle_inspect(input: &Path, class: &str, format: OutputFormat) -> Result<()> {
    let source = read_input(input)?;
    let input_name = input.display().to_string();

    let surface = guardgen::pipeline::extract_surface(&source, class, Some(&input_name))?;

    let mut writer = create_writer(std::io::stdout(), format);
    writer.write_surface(class, &surface)
}

fn read_input(input: &Path) -> Result<String> {
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
