use input_masks::config::MaskDocument;
use input_masks::core::IdentifierRegistry;
use input_masks::field::{FieldConfig, FieldEvent, KeyCode};
use input_masks::logging;
use input_masks::terminal::{InlineField, Terminal, TerminalEvent};
use std::io;
use std::process::ExitCode;

const DEFAULT_MASK: &str = "(###) ###-####";

const USAGE: &str =
    "usage: input-masks [MASK] [--placeholder TEXT] [--label TEXT] [--keep] [--config FILE]";

struct Args {
    mask: Option<String>,
    placeholder: Option<String>,
    label: Option<String>,
    keep: bool,
    config: Option<String>,
}

enum Outcome {
    Done(Vec<(String, String)>),
    Aborted,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_from_env()?;
    let args = parse_args(std::env::args().skip(1))?;

    let (registry, fields) = build_fields(args)?;
    let mut terminal = Terminal::new();
    terminal.enter_raw_mode()?;
    let result = edit_fields(&mut terminal, &registry, fields);
    terminal.exit_raw_mode()?;

    match result? {
        Outcome::Done(values) => {
            for (label, value) in values {
                println!("{label}: {value}");
            }
        }
        Outcome::Aborted => println!("aborted"),
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        mask: None,
        placeholder: None,
        label: None,
        keep: false,
        config: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--placeholder" => parsed.placeholder = Some(args.next().ok_or(USAGE)?),
            "--label" => parsed.label = Some(args.next().ok_or(USAGE)?),
            "--config" => parsed.config = Some(args.next().ok_or(USAGE)?),
            "--keep" => parsed.keep = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if arg.starts_with("--") => return Err(format!("unknown flag {arg}\n{USAGE}")),
            _ => parsed.mask = Some(arg),
        }
    }
    Ok(parsed)
}

fn build_fields(
    args: Args,
) -> Result<(IdentifierRegistry, Vec<InlineField>), Box<dyn std::error::Error>> {
    if let Some(path) = args.config.as_deref() {
        let document = MaskDocument::load(path)?;
        let registry = document.registry()?;
        let mut fields = Vec::new();
        for (name, spec) in document.fields {
            let config = with_hooks(name.as_str(), FieldConfig::from(spec));
            fields.push(InlineField::bind(&registry, name, config)?);
        }
        return Ok((registry, fields));
    }

    let registry = IdentifierRegistry::new();
    let mask = args.mask.unwrap_or_else(|| DEFAULT_MASK.to_string());
    let label = args.label.unwrap_or_else(|| mask.clone());
    let mut config = FieldConfig::new(mask).with_clear_on_fail(!args.keep);
    if let Some(placeholder) = args.placeholder {
        config = config.with_placeholder(placeholder);
    }
    let config = with_hooks(label.as_str(), config);
    let field = InlineField::bind(&registry, label, config)?;
    Ok((registry, vec![field]))
}

fn with_hooks(name: &str, config: FieldConfig) -> FieldConfig {
    let matched = name.to_string();
    let failed = name.to_string();
    config
        .on_match(move |value| log::info!("{matched}: matched {value:?}"))
        .on_fail(move || log::info!("{failed}: no match"))
}

fn edit_fields(
    terminal: &mut Terminal,
    registry: &IdentifierRegistry,
    fields: Vec<InlineField>,
) -> io::Result<Outcome> {
    let mut values = Vec::with_capacity(fields.len());

    for mut field in fields {
        field.handle(registry, FieldEvent::Focus);
        terminal.draw_field(registry, &field)?;

        loop {
            match terminal.read_event()? {
                TerminalEvent::Interrupt | TerminalEvent::Key(KeyCode::Esc) => {
                    terminal.finish_line()?;
                    return Ok(Outcome::Aborted);
                }
                TerminalEvent::Key(KeyCode::Enter | KeyCode::Tab) => {
                    field.handle(registry, FieldEvent::Blur);
                    terminal.draw_field(registry, &field)?;
                    terminal.finish_line()?;
                    break;
                }
                TerminalEvent::Key(key) => {
                    field.handle(registry, FieldEvent::Key(key));
                    terminal.draw_field(registry, &field)?;
                }
                TerminalEvent::Resize { .. } => terminal.draw_field(registry, &field)?,
            }
        }

        values.push((field.label().to_string(), field.value().to_string()));
    }

    Ok(Outcome::Done(values))
}
